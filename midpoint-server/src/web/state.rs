//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::MokaPathCache;
use crate::midpoint::MidpointFinder;
use crate::places::PlacesClient;
use crate::transit::TransitClient;

/// The finder as wired against the live providers.
pub type LiveFinder = MidpointFinder<PlacesClient, TransitClient, MokaPathCache>;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Meeting-point resolution
    pub finder: Arc<LiveFinder>,

    /// Place search client for passthrough lookups
    pub places: Arc<PlacesClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(finder: LiveFinder, places: PlacesClient) -> Self {
        Self {
            finder: Arc::new(finder),
            places: Arc::new(places),
        }
    }
}
