//! Grading of candidates over the result matrix.

use tracing::trace;

use crate::domain::{Candidate, CandidateSet, Points};

use super::error::MidpointError;
use super::resolver::ResultMatrix;

/// Scores one candidate's row of travel times. Lower is better.
///
/// Implementations must be deterministic and must not decrease when any
/// duration increases.
pub trait ScorePolicy: Send + Sync {
    fn score(&self, durations: &[u32], is_weighted: bool) -> i64;
}

/// Total travel time, minus a fixed bonus for weighted stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumWithBonus {
    pub weighted_bonus_secs: u32,
}

impl ScorePolicy for SumWithBonus {
    fn score(&self, durations: &[u32], is_weighted: bool) -> i64 {
        let total: i64 = durations.iter().map(|&d| i64::from(d)).sum();
        if is_weighted {
            total - i64::from(self.weighted_bonus_secs)
        } else {
            total
        }
    }
}

/// Pick the candidate with the lowest score.
///
/// Ties go to the candidate inserted first. Every candidate must have a
/// route from every source; a missing cell is an error, never a skip.
pub fn select<S: ScorePolicy>(
    points: &Points,
    candidates: &CandidateSet,
    matrix: &ResultMatrix,
    policy: &S,
) -> Result<Candidate, MidpointError> {
    let mut best: Option<(&Candidate, i64)> = None;

    for candidate in candidates {
        let durations = matrix
            .durations_to(candidate.point, points)
            .ok_or(MidpointError::IncompleteRoutes {
                target: candidate.point,
            })?;

        let score = policy.score(&durations, candidate.is_weighted);
        trace!(name = %candidate.name, score, "graded candidate");

        // Strict comparison keeps the earlier candidate on ties
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((candidate, score));
        }
    }

    best.map(|(candidate, _)| candidate.clone())
        .ok_or(MidpointError::NoCandidateFound)
}
