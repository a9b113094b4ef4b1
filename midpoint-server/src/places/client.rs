//! Local search HTTP client.
//!
//! Provides async methods for keyword, category, geocoding and reverse
//! geocoding lookups. Handles authentication, concurrency limiting, and
//! conversion to crate types.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::{debug, trace};

use crate::domain::{Candidate, Point};
use crate::midpoint::PlaceSearch;

use super::category::Category;
use super::convert::{
    Address, ConversionError, Location, Place, combine_geocode_and_keyword, convert_address,
    convert_geocode, convert_place,
};
use super::error::PlaceError;
use super::types::{AddressDocument, DocumentsResponse, GeocodeDocument, PlaceDocument};

/// Default base URL for the local search API.
const DEFAULT_BASE_URL: &str = "https://dapi.kakao.com";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Default search radius around a point, in metres.
const DEFAULT_RADIUS_M: u32 = 1000;

/// Configuration for the places client.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// REST API key
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Radius for category searches around a point, in metres
    pub radius_m: u32,
}

impl PlacesConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
            radius_m: DEFAULT_RADIUS_M,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the category search radius.
    pub fn with_radius(mut self, metres: u32) -> Self {
        self.radius_m = metres;
        self
    }
}

/// Local search API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    base_url: String,
    radius_m: u32,
    semaphore: Arc<Semaphore>,
}

impl PlacesClient {
    /// Create a new client with the given configuration.
    pub fn new(config: PlacesConfig) -> Result<Self, PlaceError> {
        let mut headers = HeaderMap::new();

        let auth = HeaderValue::from_str(&format!("KakaoAK {}", config.api_key)).map_err(|_| {
            PlaceError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            }
        })?;
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            radius_m: config.radius_m,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Reverse geocode a coordinate.
    pub async fn address_of(&self, point: Point) -> Result<Vec<Address>, PlaceError> {
        let docs: Vec<AddressDocument> = self
            .get_documents(
                "/v2/local/geo/coord2address.json",
                &[("x", point.x().to_string()), ("y", point.y().to_string())],
            )
            .await?;

        Ok(convert_all(&docs, convert_address))
    }

    /// Geocode an address string.
    pub async fn coordinates_of(&self, address: &str) -> Result<Vec<Location>, PlaceError> {
        let docs: Vec<GeocodeDocument> = self
            .get_documents(
                "/v2/local/search/address.json",
                &[("query", address.to_string())],
            )
            .await?;

        Ok(convert_all(&docs, convert_geocode))
    }

    /// Search places by free-text keyword.
    pub async fn keyword_search(&self, keyword: &str) -> Result<Vec<Place>, PlaceError> {
        let docs: Vec<PlaceDocument> = self
            .get_documents(
                "/v2/local/search/keyword.json",
                &[("query", keyword.to_string())],
            )
            .await?;

        Ok(convert_all(&docs, convert_place))
    }

    /// Search places of a category around a point, nearest first.
    pub async fn category_search(
        &self,
        category: Category,
        point: Point,
    ) -> Result<Vec<Place>, PlaceError> {
        let docs: Vec<PlaceDocument> = self
            .get_documents(
                "/v2/local/search/category.json",
                &[
                    ("category_group_code", category.code().to_string()),
                    ("x", point.x().to_string()),
                    ("y", point.y().to_string()),
                    ("radius", self.radius_m.to_string()),
                    ("sort", "distance".to_string()),
                ],
            )
            .await?;

        Ok(convert_all(&docs, convert_place))
    }

    /// Resolve free text to coordinates: exact-address matches first, then
    /// keyword matches.
    pub async fn locate(&self, query: &str) -> Result<Vec<Location>, PlaceError> {
        let (geocoded, places) =
            tokio::join!(self.coordinates_of(query), self.keyword_search(query));
        Ok(combine_geocode_and_keyword(geocoded?, places?))
    }

    /// GET an endpoint and decode its `documents` array.
    async fn get_documents<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, PlaceError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| PlaceError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}{}", self.base_url, path);
        trace!(%url, "place search request");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(PlaceError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PlaceError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlaceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: DocumentsResponse<T> =
            serde_json::from_str(&body).map_err(|e| PlaceError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(parsed.documents)
    }
}

/// Convert documents, skipping the ones the provider returned malformed.
fn convert_all<D, T>(docs: &[D], convert: fn(&D) -> Result<T, ConversionError>) -> Vec<T> {
    docs.iter()
        .filter_map(|doc| match convert(doc) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(error = %e, "skipping malformed place document");
                None
            }
        })
        .collect()
}

impl PlaceSearch for PlacesClient {
    async fn nearby_stations(&self, point: Point) -> Result<Vec<Candidate>, PlaceError> {
        let places = self.category_search(Category::SubwayStation, point).await?;
        Ok(places.iter().map(Place::to_candidate).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = PlacesConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_max_concurrent(2)
            .with_timeout(3)
            .with_radius(500);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent, 2);
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.radius_m, 500);
    }

    #[test]
    fn config_defaults() {
        let config = PlacesConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.radius_m, DEFAULT_RADIUS_M);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn client_creation() {
        let client = PlacesClient::new(PlacesConfig::new("test-key"));
        assert!(client.is_ok());
    }

    #[test]
    fn client_rejects_unprintable_key() {
        let client = PlacesClient::new(PlacesConfig::new("bad\nkey"));
        assert!(matches!(client, Err(PlaceError::Api { status: 0, .. })));
    }

    #[test]
    fn convert_all_skips_malformed() {
        let docs = vec![
            GeocodeDocument {
                address_name: "ok".to_string(),
                address_type: "ROAD_ADDR".to_string(),
                x: "127.0".to_string(),
                y: "37.5".to_string(),
            },
            GeocodeDocument {
                address_name: "bad".to_string(),
                address_type: "ROAD_ADDR".to_string(),
                x: "".to_string(),
                y: "37.5".to_string(),
            },
        ];

        let converted = convert_all(&docs, convert_geocode);
        assert_eq!(converted.len(), 1);
        assert_eq!(converted[0].name, "ok");
    }

    // Live requests need a real API key and are not run here.
}
