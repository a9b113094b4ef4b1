//! Route evaluation results.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Point;

/// How a route between two points was obtained from the transit provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStrategy {
    /// Subway-only routing
    DirectTransit,
    /// Any public-transit combination, including bus transfers
    TransitWithTransfer,
}

impl fmt::Display for RouteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteStrategy::DirectTransit => f.write_str("direct transit"),
            RouteStrategy::TransitWithTransfer => f.write_str("transit with transfer"),
        }
    }
}

/// The evaluated travel time for one (source, target) pair.
///
/// Immutable once computed; cached entries are shared across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    pub source: Point,
    pub target: Point,
    /// Total travel time in seconds
    pub duration_secs: u32,
    /// Whether the target is a weighted station
    pub weighted: bool,
    /// Which routing strategy produced this result
    pub strategy: RouteStrategy,
}

impl RouteResult {
    /// Pick the faster of two results.
    ///
    /// Equal durations resolve to the direct-transit result, regardless of
    /// argument order.
    pub fn min_time(a: RouteResult, b: RouteResult) -> RouteResult {
        match a.duration_secs.cmp(&b.duration_secs) {
            std::cmp::Ordering::Less => a,
            std::cmp::Ordering::Greater => b,
            std::cmp::Ordering::Equal => {
                if b.strategy == RouteStrategy::DirectTransit {
                    b
                } else {
                    a
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(duration_secs: u32, strategy: RouteStrategy) -> RouteResult {
        RouteResult {
            source: Point::new(0.0, 0.0).unwrap(),
            target: Point::new(1.0, 1.0).unwrap(),
            duration_secs,
            weighted: false,
            strategy,
        }
    }

    #[test]
    fn min_time_picks_shorter() {
        let direct = result(900, RouteStrategy::DirectTransit);
        let transfer = result(600, RouteStrategy::TransitWithTransfer);

        let best = RouteResult::min_time(direct, transfer);
        assert_eq!(best.strategy, RouteStrategy::TransitWithTransfer);
        assert_eq!(best.duration_secs, 600);
    }

    #[test]
    fn min_time_tie_prefers_direct() {
        let direct = result(600, RouteStrategy::DirectTransit);
        let transfer = result(600, RouteStrategy::TransitWithTransfer);

        assert_eq!(
            RouteResult::min_time(direct.clone(), transfer.clone()).strategy,
            RouteStrategy::DirectTransit
        );
        assert_eq!(
            RouteResult::min_time(transfer, direct).strategy,
            RouteStrategy::DirectTransit
        );
    }

    #[test]
    fn strategy_display() {
        assert_eq!(RouteStrategy::DirectTransit.to_string(), "direct transit");
        assert_eq!(
            RouteStrategy::TransitWithTransfer.to_string(),
            "transit with transfer"
        );
    }

    #[test]
    fn serde_roundtrip_uses_snake_case() {
        let r = result(420, RouteStrategy::TransitWithTransfer);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"transit_with_transfer\""));

        let back: RouteResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
