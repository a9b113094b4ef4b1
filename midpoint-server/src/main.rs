use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use midpoint_server::cache::{CacheConfig, MokaPathCache};
use midpoint_server::midpoint::{GradingConfig, MidpointFinder, PathResolver};
use midpoint_server::places::{PlacesClient, PlacesConfig};
use midpoint_server::transit::{TransitClient, TransitConfig};
use midpoint_server::weighted::{WeightedStations, seoul_hubs};
use midpoint_server::web::{AppState, create_router};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Read an API key, warning when it is missing.
fn api_key(var: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| {
        warn!("{var} not set. API calls will fail.");
        String::new()
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("midpoint_server=info,tower_http=info")),
        )
        .init();

    // Provider clients
    let places = PlacesClient::new(PlacesConfig::new(api_key("KAKAO_API_KEY")))?;
    let transit = TransitClient::new(TransitConfig::new(api_key("ODSAY_API_KEY")))?;

    // Weighted stations, from file if given
    let registry = match std::env::var("MIDPOINT_WEIGHTED_STATIONS") {
        Ok(path) => WeightedStations::load(&path)?,
        Err(_) => seoul_hubs(),
    };
    info!(stations = registry.len(), "loaded weighted stations");

    let mut grading = GradingConfig::default();
    if let Ok(secs) = std::env::var("MIDPOINT_WEIGHTED_BONUS_SECS") {
        grading = grading.with_weighted_bonus(secs.parse()?);
    }

    let cache = MokaPathCache::new(&CacheConfig::default());
    let resolver = PathResolver::new(transit, cache);
    let finder = MidpointFinder::new(places.clone(), resolver, registry, &grading);

    let state = AppState::new(finder, places);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("MIDPOINT_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    info!(%addr, "meeting-point server listening");
    info!("  GET  /health                      - Health check");
    info!("  POST /api/locations/midpoint      - Resolve a meeting point");
    info!("  GET  /api/locations/address       - Reverse geocode x, y");
    info!("  GET  /api/locations/coordinate    - Geocode an address");
    info!("  GET  /api/locations/utility       - Places of a category near x, y");
    info!("  GET  /api/locations/search        - Keyword search");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
