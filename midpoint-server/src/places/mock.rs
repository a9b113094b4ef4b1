//! Mock place search for testing without API access.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{Candidate, Point};
use crate::midpoint::PlaceSearch;

use super::error::PlaceError;

/// Place search double that returns a fixed station list.
///
/// Clones share the call counter.
#[derive(Debug, Clone)]
pub struct MockPlaceSearch {
    stations: Vec<Candidate>,
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockPlaceSearch {
    /// Serve the given stations for every query.
    pub fn with_stations(stations: Vec<Candidate>) -> Self {
        Self {
            stations,
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Fail every query with an API error.
    pub fn failing() -> Self {
        Self {
            stations: Vec::new(),
            fail: true,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of queries served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PlaceSearch for MockPlaceSearch {
    async fn nearby_stations(&self, _point: Point) -> Result<Vec<Candidate>, PlaceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(PlaceError::Api {
                status: 503,
                message: "mock place search unavailable".to_string(),
            });
        }
        Ok(self.stations.clone())
    }
}
