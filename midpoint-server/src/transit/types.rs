//! Transit path search API response DTOs.
//!
//! These types map directly to the public-transit path search JSON.
//! Errors arrive with HTTP 200 and an `error` member whose shape varies
//! (object or array), so it is kept as a raw value.

use serde::Deserialize;

/// Top-level response from `searchPubTransPathT`.
#[derive(Debug, Clone, Deserialize)]
pub struct PathSearchResponse {
    /// Present on success.
    pub result: Option<PathSearchResult>,

    /// Present on failure.
    pub error: Option<serde_json::Value>,
}

/// Successful search payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSearchResult {
    /// 0 = intra-city, 1 = inter-city.
    pub search_type: Option<u8>,

    /// Candidate paths, in provider order.
    #[serde(default)]
    pub path: Vec<TransitPath>,
}

/// One candidate path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitPath {
    /// 1 = subway, 2 = bus, 3 = bus + subway.
    pub path_type: Option<u8>,

    /// Summary of the path.
    pub info: PathInfo,
}

/// Path summary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathInfo {
    /// Total travel time in minutes.
    pub total_time: u32,

    /// Fare in KRW.
    pub payment: Option<u32>,

    /// Number of bus boardings.
    pub bus_transit_count: Option<u32>,

    /// Number of subway boardings.
    pub subway_transit_count: Option<u32>,

    /// Total walking distance in metres.
    pub total_walk: Option<u32>,

    /// First boarding stop name.
    pub first_start_station: Option<String>,

    /// Last alighting stop name.
    pub last_end_station: Option<String>,
}
