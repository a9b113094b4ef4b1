//! Conversion from path search DTOs to itineraries.

use serde::Serialize;

use crate::domain::Point;

use super::error::TransitError;
use super::types::{PathInfo, PathSearchResponse};

/// Provider error code for origin and destination within walking distance.
pub const TOO_CLOSE_CODE: &str = "-98";

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Summary of a travel itinerary between two points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    /// Total travel time in seconds
    pub total_secs: u32,
    /// Number of changes between vehicles
    pub transfer_count: u32,
    /// Fare in KRW, if reported
    pub fare: Option<u32>,
    /// Walking distance in metres, if reported
    pub walk_m: Option<u32>,
}

impl Itinerary {
    /// A walk-only itinerary between two points at the given speed.
    pub fn walking(from: Point, to: Point, speed_mps: f64) -> Self {
        let distance = haversine_m(from, to);
        let secs = if speed_mps > 0.0 {
            (distance / speed_mps).ceil()
        } else {
            0.0
        };

        Self {
            total_secs: secs as u32,
            transfer_count: 0,
            fare: None,
            walk_m: Some(distance.round() as u32),
        }
    }

    fn from_info(info: &PathInfo) -> Self {
        let boardings = info.bus_transit_count.unwrap_or(0) + info.subway_transit_count.unwrap_or(0);
        Self {
            total_secs: info.total_time.saturating_mul(60),
            transfer_count: boardings.saturating_sub(1),
            fare: info.payment,
            walk_m: info.total_walk,
        }
    }
}

/// Great-circle distance between two lon/lat points, in metres.
pub fn haversine_m(from: Point, to: Point) -> f64 {
    let (lat1, lat2) = (from.y().to_radians(), to.y().to_radians());
    let dlat = lat2 - lat1;
    let dlon = (to.x() - from.x()).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

/// Extract `(code, message)` from the provider's error member.
///
/// The member is either an object or an array of objects, with the text
/// under `msg` or `message`.
pub fn provider_error(error: &serde_json::Value) -> (String, String) {
    let entry = match error {
        serde_json::Value::Array(items) => items.first().unwrap_or(error),
        _ => error,
    };

    let field = |name: &str| {
        entry.get(name).map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    };

    let code = field("code").unwrap_or_default();
    let message = field("msg")
        .or_else(|| field("message"))
        .unwrap_or_else(|| error.to_string());
    (code, message)
}

/// Pick the fastest path in a response.
pub fn fastest_itinerary(response: &PathSearchResponse) -> Result<Itinerary, TransitError> {
    if let Some(error) = &response.error {
        let (code, message) = provider_error(error);
        return Err(TransitError::Provider { code, message });
    }

    response
        .result
        .as_ref()
        .and_then(|result| result.path.iter().min_by_key(|p| p.info.total_time))
        .map(|path| Itinerary::from_info(&path.info))
        .ok_or(TransitError::NoRoute)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> PathSearchResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn picks_fastest_path() {
        let response = parse(
            r#"{"result": {"path": [
                {"pathType": 3, "info": {"totalTime": 50, "busTransitCount": 1, "subwayTransitCount": 1}},
                {"pathType": 1, "info": {"totalTime": 42, "payment": 1400, "subwayTransitCount": 2, "totalWalk": 300}}
            ]}}"#,
        );

        let itinerary = fastest_itinerary(&response).unwrap();
        assert_eq!(itinerary.total_secs, 42 * 60);
        assert_eq!(itinerary.transfer_count, 1);
        assert_eq!(itinerary.fare, Some(1400));
        assert_eq!(itinerary.walk_m, Some(300));
    }

    #[test]
    fn empty_path_list_is_no_route() {
        let response = parse(r#"{"result": {"path": []}}"#);
        assert!(matches!(
            fastest_itinerary(&response),
            Err(TransitError::NoRoute)
        ));
    }

    #[test]
    fn error_object_is_provider_error() {
        let response = parse(r#"{"error": {"code": "-98", "msg": "too close"}}"#);
        match fastest_itinerary(&response) {
            Err(TransitError::Provider { code, message }) => {
                assert_eq!(code, TOO_CLOSE_CODE);
                assert_eq!(message, "too close");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn error_array_is_provider_error() {
        let response = parse(r#"{"error": [{"code": 500, "message": "server error"}]}"#);
        match fastest_itinerary(&response) {
            Err(TransitError::Provider { code, message }) => {
                assert_eq!(code, "500");
                assert_eq!(message, "server error");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn haversine_known_distance() {
        // Seoul Station to Gangnam Station is roughly 8.1 km
        let seoul = Point::new(126.972559, 37.554648).unwrap();
        let gangnam = Point::new(127.027926, 37.497175).unwrap();
        let d = haversine_m(seoul, gangnam);
        assert!((7_500.0..8_500.0).contains(&d), "distance was {d}");
    }

    #[test]
    fn walking_itinerary() {
        let a = Point::new(127.0, 37.5).unwrap();
        assert_eq!(Itinerary::walking(a, a, 1.2).total_secs, 0);

        let b = Point::new(127.0, 37.501).unwrap();
        let walk = Itinerary::walking(a, b, 1.0);
        // 0.001 degrees of latitude is about 111 m
        assert!((105..=118).contains(&walk.total_secs));
        assert_eq!(walk.transfer_count, 0);
    }
}
