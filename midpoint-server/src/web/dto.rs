//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Point, Points};
use crate::places::{Address, Location, Place};

/// Request to resolve a meeting point.
#[derive(Debug, Deserialize)]
pub struct MidpointRequest {
    /// Where each participant starts
    pub locations: Vec<CoordinateParams>,
}

impl MidpointRequest {
    /// Validate the request into a non-empty set of points.
    pub fn to_points(&self) -> Result<Points, DomainError> {
        let points = self
            .locations
            .iter()
            .map(|c| Point::new(c.x, c.y))
            .collect::<Result<Vec<_>, _>>()?;
        Points::new(points)
    }
}

/// A bare coordinate, as a JSON body member or query string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoordinateParams {
    pub x: f64,
    pub y: f64,
}

impl CoordinateParams {
    pub fn to_point(self) -> Result<Point, DomainError> {
        Point::new(self.x, self.y)
    }
}

/// The resolved meeting point.
#[derive(Debug, Serialize)]
pub struct MidpointResponse {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for MidpointResponse {
    fn from(point: Point) -> Self {
        Self {
            x: point.x(),
            y: point.y(),
        }
    }
}

/// Query for address geocoding.
#[derive(Debug, Deserialize)]
pub struct CoordinateQuery {
    pub address: String,
}

/// Query for category search around a point.
#[derive(Debug, Deserialize)]
pub struct UtilityQuery {
    /// Category label, Korean or English, or a provider code
    pub category: String,
    pub x: f64,
    pub y: f64,
}

/// Query for keyword search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
}

/// A reverse-geocoded address.
#[derive(Debug, Serialize)]
pub struct AddressResult {
    pub address: String,
    pub road_address: Option<String>,
    pub building_name: Option<String>,
    pub region_1: String,
    pub region_2: String,
    pub region_3: String,
}

impl From<Address> for AddressResult {
    fn from(a: Address) -> Self {
        Self {
            address: a.address,
            road_address: a.road_address,
            building_name: a.building_name,
            region_1: a.region_1,
            region_2: a.region_2,
            region_3: a.region_3,
        }
    }
}

/// A named coordinate.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    pub name: String,
    pub address: String,
    pub x: f64,
    pub y: f64,
}

impl From<Location> for LocationResult {
    fn from(l: Location) -> Self {
        Self {
            name: l.name,
            address: l.address,
            x: l.point.x(),
            y: l.point.y(),
        }
    }
}

/// A point of interest.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    pub id: String,
    pub name: String,
    pub category: String,
    pub phone: Option<String>,
    pub address: String,
    pub road_address: Option<String>,
    pub url: Option<String>,
    /// Distance from the search centre in metres
    pub distance: Option<u32>,
    pub x: f64,
    pub y: f64,
}

impl From<Place> for PlaceResult {
    fn from(p: Place) -> Self {
        Self {
            id: p.id,
            name: p.name,
            category: p.category,
            phone: p.phone,
            address: p.address,
            road_address: p.road_address,
            url: p.url,
            distance: p.distance_m,
            x: p.point.x(),
            y: p.point.y(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
