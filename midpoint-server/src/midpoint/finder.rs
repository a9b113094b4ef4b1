//! Meeting-point resolution entry point.

use tracing::info;

use crate::cache::PathCache;
use crate::domain::{Candidate, Point, Points};
use crate::weighted::WeightedStations;

use super::candidates::{PlaceSearch, generate};
use super::config::GradingConfig;
use super::error::MidpointError;
use super::grade::{ScorePolicy, SumWithBonus, select};
use super::resolver::{PathResolver, TransitRouter};

/// Finds the best shared meeting point for a group of locations.
///
/// Generates candidates around the group's centroid, resolves routes from
/// every location to every candidate, then grades the candidates with the
/// scoring policy `S`.
pub struct MidpointFinder<P, R, C, S = SumWithBonus> {
    places: P,
    resolver: PathResolver<R, C>,
    registry: WeightedStations,
    policy: S,
}

impl<P, R, C> MidpointFinder<P, R, C>
where
    P: PlaceSearch,
    R: TransitRouter,
    C: PathCache,
{
    /// Create a finder grading with the configured sum-with-bonus policy.
    pub fn new(
        places: P,
        resolver: PathResolver<R, C>,
        registry: WeightedStations,
        config: &GradingConfig,
    ) -> Self {
        Self::with_policy(places, resolver, registry, config.policy())
    }
}

impl<P, R, C, S> MidpointFinder<P, R, C, S>
where
    P: PlaceSearch,
    R: TransitRouter,
    C: PathCache,
    S: ScorePolicy,
{
    /// Create a finder grading with a custom scoring policy.
    pub fn with_policy(
        places: P,
        resolver: PathResolver<R, C>,
        registry: WeightedStations,
        policy: S,
    ) -> Self {
        Self {
            places,
            resolver,
            registry,
            policy,
        }
    }

    pub fn policy(&self) -> &S {
        &self.policy
    }

    pub fn resolver(&self) -> &PathResolver<R, C> {
        &self.resolver
    }

    pub fn registry(&self) -> &WeightedStations {
        &self.registry
    }

    /// Resolve the winning candidate.
    pub async fn resolve_meeting_candidate(
        &self,
        points: &Points,
    ) -> Result<Candidate, MidpointError> {
        let candidates = generate(&self.places, &self.registry, points).await?;
        if candidates.is_empty() {
            return Err(MidpointError::NoCandidateFound);
        }

        let matrix = self.resolver.resolve_all(points, &candidates).await?;
        let winner = select(points, &candidates, &matrix, &self.policy)?;

        info!(
            locations = points.len(),
            candidates = candidates.len(),
            name = %winner.name,
            point = %winner.point,
            "resolved meeting point"
        );
        Ok(winner)
    }

    /// Resolve the meeting point's coordinate.
    pub async fn resolve_meeting_point(&self, points: &Points) -> Result<Point, MidpointError> {
        self.resolve_meeting_candidate(points)
            .await
            .map(|candidate| candidate.point)
    }
}
