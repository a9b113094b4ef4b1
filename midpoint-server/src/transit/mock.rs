//! Mock transit router for testing without API access.
//!
//! Serves itineraries from a table keyed by (source, target) and records
//! how many calls were made and how many overlapped.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Point;
use crate::midpoint::TransitRouter;

use super::convert::Itinerary;
use super::error::TransitError;

/// Table-driven transit router double.
///
/// Clones share their counters.
#[derive(Debug, Clone, Default)]
pub struct MockTransitRouter {
    /// (source, target) -> (direct secs, transfer secs)
    routes: HashMap<(Point, Point), (u32, u32)>,
    failing: HashSet<(Point, Point)>,
    counters: Arc<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    direct: AtomicUsize,
    transfer: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockTransitRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the given durations for a pair.
    pub fn with_route(mut self, source: Point, target: Point, direct: u32, transfer: u32) -> Self {
        self.routes.insert((source, target), (direct, transfer));
        self
    }

    /// Serve the same duration for both strategies.
    pub fn with_duration(self, source: Point, target: Point, secs: u32) -> Self {
        self.with_route(source, target, secs, secs)
    }

    /// Fail every request for a pair.
    pub fn failing_for(mut self, source: Point, target: Point) -> Self {
        self.failing.insert((source, target));
        self
    }

    /// Number of direct-transit requests served.
    pub fn direct_calls(&self) -> usize {
        self.counters.direct.load(Ordering::SeqCst)
    }

    /// Number of transit-with-transfer requests served.
    pub fn transfer_calls(&self) -> usize {
        self.counters.transfer.load(Ordering::SeqCst)
    }

    /// Total requests served.
    pub fn total_calls(&self) -> usize {
        self.direct_calls() + self.transfer_calls()
    }

    /// Highest number of requests observed in flight at once.
    pub fn max_in_flight(&self) -> usize {
        self.counters.max_in_flight.load(Ordering::SeqCst)
    }

    async fn lookup(
        &self,
        source: Point,
        target: Point,
        pick: fn((u32, u32)) -> u32,
    ) -> Result<Itinerary, TransitError> {
        let now = self.counters.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.counters.max_in_flight.fetch_max(now, Ordering::SeqCst);

        // Give sibling requests a chance to start
        tokio::task::yield_now().await;

        let result = if self.failing.contains(&(source, target)) {
            Err(TransitError::Api {
                status: 500,
                message: format!("mock failure for {source} -> {target}"),
            })
        } else {
            self.routes
                .get(&(source, target))
                .map(|&durations| Itinerary {
                    total_secs: pick(durations),
                    transfer_count: 0,
                    fare: None,
                    walk_m: None,
                })
                .ok_or(TransitError::NoRoute)
        };

        self.counters.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

impl TransitRouter for MockTransitRouter {
    async fn direct_route(&self, source: Point, target: Point) -> Result<Itinerary, TransitError> {
        self.counters.direct.fetch_add(1, Ordering::SeqCst);
        self.lookup(source, target, |(direct, _)| direct).await
    }

    async fn transfer_route(
        &self,
        source: Point,
        target: Point,
    ) -> Result<Itinerary, TransitError> {
        self.counters.transfer.fetch_add(1, Ordering::SeqCst);
        self.lookup(source, target, |(_, transfer)| transfer).await
    }
}
