//! Public-transit path search client.
//!
//! This module provides an HTTP client for an ODsay-style public-transit
//! path search API, used as the black-box routing collaborator.
//!
//! Key characteristics of the API:
//! - One endpoint (`searchPubTransPathT`) with a `SearchPathType` switch:
//!   subway only or any mode
//! - Errors come back as HTTP 200 with an `error` member
//! - Origin and destination within roughly 700 m are rejected with code
//!   `-98`; those pairs are answered with a walking estimate instead

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{SearchPathType, TransitClient, TransitConfig};
pub use convert::{Itinerary, haversine_m};
pub use error::TransitError;
pub use mock::MockTransitRouter;
pub use types::{PathInfo, PathSearchResponse, PathSearchResult, TransitPath};
