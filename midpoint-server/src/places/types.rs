//! Place search API response DTOs.
//!
//! These types map directly to the local search API JSON responses.
//! Coordinates arrive as decimal strings and many fields are empty strings
//! rather than absent, so conversion to domain types happens separately.

use serde::Deserialize;

/// Envelope shared by every local search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsResponse<T> {
    /// Paging metadata.
    pub meta: Option<ResponseMeta>,

    /// Result documents.
    pub documents: Vec<T>,
}

/// Paging metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMeta {
    /// Number of matching documents.
    pub total_count: Option<u32>,

    /// Whether this is the last page.
    pub is_end: Option<bool>,
}

/// A keyword or category search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDocument {
    /// Provider place ID.
    pub id: String,

    /// Place name, e.g. "강남역 2호선".
    pub place_name: String,

    /// Full category path, e.g. "교통,수송 > 지하철,전철 > 수도권2호선".
    #[serde(default)]
    pub category_name: String,

    /// Category group code, e.g. "SW8".
    #[serde(default)]
    pub category_group_code: String,

    /// Phone number (often empty).
    #[serde(default)]
    pub phone: String,

    /// Lot-number address.
    #[serde(default)]
    pub address_name: String,

    /// Road-name address.
    #[serde(default)]
    pub road_address_name: String,

    /// Longitude as a decimal string.
    pub x: String,

    /// Latitude as a decimal string.
    pub y: String,

    /// Place detail page.
    #[serde(default)]
    pub place_url: String,

    /// Distance from the search centre in metres (empty without a centre).
    #[serde(default)]
    pub distance: String,
}

/// An address search (geocoding) hit.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeDocument {
    /// Full address.
    pub address_name: String,

    /// REGION, ROAD, REGION_ADDR or ROAD_ADDR.
    #[serde(default)]
    pub address_type: String,

    /// Longitude as a decimal string.
    pub x: String,

    /// Latitude as a decimal string.
    pub y: String,
}

/// A reverse geocoding hit.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressDocument {
    /// Lot-number address.
    pub address: Option<LotAddress>,

    /// Road-name address (absent for many rural coordinates).
    pub road_address: Option<RoadAddress>,
}

/// Lot-number address detail.
#[derive(Debug, Clone, Deserialize)]
pub struct LotAddress {
    pub address_name: String,
    #[serde(default)]
    pub region_1depth_name: String,
    #[serde(default)]
    pub region_2depth_name: String,
    #[serde(default)]
    pub region_3depth_name: String,
}

/// Road-name address detail.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadAddress {
    pub address_name: String,
    #[serde(default)]
    pub building_name: String,
    #[serde(default)]
    pub zone_no: String,
}
