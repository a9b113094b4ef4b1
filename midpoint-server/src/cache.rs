//! Caching layer for computed routes.
//!
//! Route results are keyed by the ordered (source, target) pair and are
//! treated as time-invariant: once written, an entry is never invalidated by
//! this crate. The cache is a pure optimisation. Callers fall back to the
//! transit provider whenever the backend reports an error.

use std::future::Future;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Point, RouteResult};

/// Cache key for routes: the ordered (source, target) pair.
///
/// A structured key, so two distinct pairs can never collide the way
/// concatenated coordinate strings can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathKey {
    pub source: Point,
    pub target: Point,
}

impl PathKey {
    pub fn new(source: Point, target: Point) -> Self {
        Self { source, target }
    }
}

/// Errors from a cache backend.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    /// The backend could not be reached or failed to answer
    #[error("cache unavailable: {message}")]
    Unavailable { message: String },
}

/// Storage port for computed routes.
///
/// Writes must be idempotent: concurrent requests may compute the same pair
/// and overwrite each other with equivalent values.
pub trait PathCache: Send + Sync {
    /// Read the cached route for a pair.
    fn get(
        &self,
        key: &PathKey,
    ) -> impl Future<Output = Result<Option<RouteResult>, CacheError>> + Send;

    /// Store a computed route.
    fn put(
        &self,
        key: PathKey,
        route: RouteResult,
    ) -> impl Future<Output = Result<(), CacheError>> + Send;
}

/// Configuration for the in-process cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached routes.
    pub max_capacity: u64,

    /// TTL for cached routes. `None` keeps entries until evicted by capacity.
    pub time_to_live: Option<Duration>,
}

impl CacheConfig {
    /// Set the maximum number of cached routes.
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Expire entries after the given duration.
    pub fn with_time_to_live(mut self, ttl: Duration) -> Self {
        self.time_to_live = Some(ttl);
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 100_000,
            time_to_live: None,
        }
    }
}

/// Process-wide route cache backed by moka.
///
/// Cheap to clone; clones share the same storage.
#[derive(Clone)]
pub struct MokaPathCache {
    routes: MokaCache<PathKey, RouteResult>,
}

impl MokaPathCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let mut builder = MokaCache::builder().max_capacity(config.max_capacity);
        if let Some(ttl) = config.time_to_live {
            builder = builder.time_to_live(ttl);
        }

        Self {
            routes: builder.build(),
        }
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

impl PathCache for MokaPathCache {
    async fn get(&self, key: &PathKey) -> Result<Option<RouteResult>, CacheError> {
        Ok(self.routes.get(key).await)
    }

    async fn put(&self, key: PathKey, route: RouteResult) -> Result<(), CacheError> {
        self.routes.insert(key, route).await;
        Ok(())
    }
}
