//! Local search (places) client.
//!
//! This module provides an HTTP client for a Kakao-style local search API:
//! keyword and category place search, address geocoding and reverse
//! geocoding.
//!
//! Key characteristics of the API:
//! - Coordinates are longitude (`x`) / latitude (`y`) decimal strings
//! - Every endpoint wraps its results in a `documents` array
//! - Subway stations are the `SW8` category group, which seeds candidate
//!   meeting points

mod category;
mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use category::Category;
pub use client::{PlacesClient, PlacesConfig};
pub use convert::{Address, ConversionError, Location, Place, combine_geocode_and_keyword};
pub use error::PlaceError;
pub use mock::MockPlaceSearch;
pub use types::{
    AddressDocument, DocumentsResponse, GeocodeDocument, LotAddress, PlaceDocument, ResponseMeta,
    RoadAddress,
};
