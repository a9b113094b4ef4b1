//! Grading configuration for meeting-point selection.

use super::grade::SumWithBonus;

/// Default head start given to weighted stations, in seconds.
pub const DEFAULT_WEIGHTED_BONUS_SECS: u32 = 300;

/// Configuration parameters for grading candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingConfig {
    /// Seconds subtracted from a weighted station's total travel time.
    pub weighted_bonus_secs: u32,
}

impl GradingConfig {
    /// Set the weighted-station bonus.
    pub fn with_weighted_bonus(mut self, secs: u32) -> Self {
        self.weighted_bonus_secs = secs;
        self
    }

    /// The scoring policy described by this configuration.
    pub fn policy(&self) -> SumWithBonus {
        SumWithBonus {
            weighted_bonus_secs: self.weighted_bonus_secs,
        }
    }
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            weighted_bonus_secs: DEFAULT_WEIGHTED_BONUS_SECS,
        }
    }
}
