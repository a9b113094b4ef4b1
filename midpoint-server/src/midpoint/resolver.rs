//! Cache-aside route resolution for (source, candidate) pairs.

use std::collections::{HashMap, HashSet};
use std::future::Future;

use futures::future::try_join_all;
use tracing::{debug, trace, warn};

use crate::cache::{PathCache, PathKey};
use crate::domain::{Candidate, CandidateSet, Point, Points, RouteResult, RouteStrategy};
use crate::transit::{Itinerary, TransitError};

use super::error::MidpointError;

/// Routing collaborator offering the two strategies every pair is tried with.
///
/// This abstraction allows the resolver to be tested with mock data.
pub trait TransitRouter: Send + Sync {
    /// Route using subway lines only.
    fn direct_route(
        &self,
        source: Point,
        target: Point,
    ) -> impl Future<Output = Result<Itinerary, TransitError>> + Send;

    /// Route using any public transit, including bus transfers.
    fn transfer_route(
        &self,
        source: Point,
        target: Point,
    ) -> impl Future<Output = Result<Itinerary, TransitError>> + Send;
}

/// Route results for every (source, target) pair of one resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultMatrix {
    rows: HashMap<Point, HashMap<Point, RouteResult>>,
}

impl ResultMatrix {
    /// Insert a result under its own source and target.
    pub fn insert(&mut self, route: RouteResult) {
        self.rows
            .entry(route.source)
            .or_default()
            .insert(route.target, route);
    }

    pub fn get(&self, source: &Point, target: &Point) -> Option<&RouteResult> {
        self.rows.get(source).and_then(|row| row.get(target))
    }

    /// Durations from each source to `target`, in source order.
    ///
    /// Returns `None` unless every source has a result.
    pub fn durations_to(&self, target: Point, sources: &Points) -> Option<Vec<u32>> {
        sources
            .iter()
            .map(|source| self.get(source, &target).map(|r| r.duration_secs))
            .collect()
    }

    /// Number of distinct (source, target) pairs filled.
    ///
    /// A location given twice occupies one cell per target.
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolves routes through a cache, falling back to the router on a miss.
#[derive(Debug, Clone)]
pub struct PathResolver<R, C> {
    router: R,
    cache: C,
}

impl<R: TransitRouter, C: PathCache> PathResolver<R, C> {
    pub fn new(router: R, cache: C) -> Self {
        Self { router, cache }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Best route from `source` to a candidate.
    ///
    /// On a miss, both strategies are requested and the faster result is
    /// stored. Cache failures are logged and never fail the call.
    pub async fn resolve(
        &self,
        source: Point,
        candidate: &Candidate,
    ) -> Result<RouteResult, MidpointError> {
        let target = candidate.point;
        let key = PathKey::new(source, target);

        match self.cache.get(&key).await {
            Ok(Some(route)) => {
                trace!(%source, %target, "path cache hit");
                return Ok(route);
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, %source, %target, "path cache read failed"),
        }

        let route_error = move |e| MidpointError::RouteRequest {
            from: source,
            to: target,
            source: e,
        };

        let direct = self
            .router
            .direct_route(source, target)
            .await
            .map_err(route_error)?;
        let transfer = self
            .router
            .transfer_route(source, target)
            .await
            .map_err(route_error)?;

        let route = |itinerary: Itinerary, strategy| RouteResult {
            source,
            target,
            duration_secs: itinerary.total_secs,
            weighted: candidate.is_weighted,
            strategy,
        };

        let best = RouteResult::min_time(
            route(direct, RouteStrategy::DirectTransit),
            route(transfer, RouteStrategy::TransitWithTransfer),
        );
        debug!(
            %source,
            %target,
            duration_secs = best.duration_secs,
            strategy = %best.strategy,
            "computed route"
        );

        if let Err(e) = self.cache.put(key, best.clone()).await {
            warn!(error = %e, %source, %target, "path cache write failed");
        }

        Ok(best)
    }

    /// Resolve every (source, candidate) pair.
    ///
    /// Candidates are processed one at a time with all distinct sources
    /// resolved concurrently, so at most `points.len()` pairs are in flight.
    /// A repeated location is resolved once. The first routing failure aborts
    /// the whole batch.
    pub async fn resolve_all(
        &self,
        points: &Points,
        candidates: &CandidateSet,
    ) -> Result<ResultMatrix, MidpointError> {
        let mut seen = HashSet::new();
        let sources: Vec<Point> = points.iter().copied().filter(|p| seen.insert(*p)).collect();

        let mut matrix = ResultMatrix::default();

        for candidate in candidates {
            let futures = sources
                .iter()
                .map(|&source| self.resolve(source, candidate));

            for route in try_join_all(futures).await? {
                matrix.insert(route);
            }
        }

        debug!(
            sources = points.len(),
            candidates = candidates.len(),
            cells = matrix.len(),
            "resolved result matrix"
        );
        Ok(matrix)
    }
}
