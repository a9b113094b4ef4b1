//! Public-transit path search HTTP client.
//!
//! Provides async methods for querying travel itineraries between two
//! coordinates, either by subway only or by any combination of modes.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{debug, trace};

use crate::domain::Point;
use crate::midpoint::TransitRouter;

use super::convert::{Itinerary, TOO_CLOSE_CODE, fastest_itinerary};
use super::error::TransitError;
use super::types::PathSearchResponse;

/// Default base URL for the path search API.
const DEFAULT_BASE_URL: &str = "https://api.odsay.com/v1/api";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Default walking speed used when origin and destination are too close to
/// route, in metres per second.
const DEFAULT_WALKING_SPEED_MPS: f64 = 1.2;

/// Which modes a path search may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPathType {
    /// Any public transit
    All,
    /// Subway only
    Subway,
}

impl SearchPathType {
    fn as_param(self) -> &'static str {
        match self {
            SearchPathType::All => "0",
            SearchPathType::Subway => "1",
        }
    }
}

/// Configuration for the transit client.
#[derive(Debug, Clone)]
pub struct TransitConfig {
    /// API key, sent as the `apiKey` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Walking speed for pairs too close to route, in m/s
    pub walking_speed_mps: f64,
}

impl TransitConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
            walking_speed_mps: DEFAULT_WALKING_SPEED_MPS,
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

    /// Set the walking speed used for very short trips.
    pub fn with_walking_speed(mut self, mps: f64) -> Self {
        self.walking_speed_mps = mps;
        self
    }
}

/// Public-transit path search client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct TransitClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    walking_speed_mps: f64,
    semaphore: Arc<Semaphore>,
}

impl TransitClient {
    /// Create a new transit client with the given configuration.
    pub fn new(config: TransitConfig) -> Result<Self, TransitError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            walking_speed_mps: config.walking_speed_mps,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Find the fastest itinerary between two points using the given modes.
    ///
    /// Pairs the provider rejects as within walking distance are answered
    /// with a walk-only itinerary.
    pub async fn search_path(
        &self,
        source: Point,
        target: Point,
        path_type: SearchPathType,
    ) -> Result<Itinerary, TransitError> {
        let response = self.fetch(source, target, path_type).await?;

        match fastest_itinerary(&response) {
            Err(TransitError::Provider { code, .. }) if code == TOO_CLOSE_CODE => {
                debug!(%source, %target, "pair within walking distance");
                Ok(Itinerary::walking(source, target, self.walking_speed_mps))
            }
            other => other,
        }
    }

    /// Get the raw path search response (for debugging/testing).
    pub async fn fetch(
        &self,
        source: Point,
        target: Point,
        path_type: SearchPathType,
    ) -> Result<PathSearchResponse, TransitError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TransitError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/searchPubTransPathT", self.base_url);
        trace!(%source, %target, ?path_type, "path search request");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("SX", source.x().to_string()),
                ("SY", source.y().to_string()),
                ("EX", target.x().to_string()),
                ("EY", target.y().to_string()),
                ("SearchPathType", path_type.as_param().to_string()),
                ("apiKey", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(TransitError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransitError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransitError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TransitError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl TransitRouter for TransitClient {
    async fn direct_route(&self, source: Point, target: Point) -> Result<Itinerary, TransitError> {
        self.search_path(source, target, SearchPathType::Subway).await
    }

    async fn transfer_route(
        &self,
        source: Point,
        target: Point,
    ) -> Result<Itinerary, TransitError> {
        self.search_path(source, target, SearchPathType::All).await
    }
}
