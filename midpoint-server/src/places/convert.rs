//! Conversion from place search DTOs to crate types.

use crate::domain::{Candidate, Point};

use super::types::{AddressDocument, GeocodeDocument, PlaceDocument};

/// Error converting a provider document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Coordinates were not parseable finite decimals
    #[error("invalid coordinate ({x}, {y})")]
    InvalidCoordinate { x: String, y: String },

    /// Reverse geocoding document carried neither address form
    #[error("document has no address")]
    MissingAddress,
}

/// A point of interest returned by keyword or category search.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: String,
    pub name: String,
    /// Full category path
    pub category: String,
    /// Provider category group code
    pub category_code: String,
    pub phone: Option<String>,
    pub address: String,
    pub road_address: Option<String>,
    pub url: Option<String>,
    /// Distance from the search centre, when one was given
    pub distance_m: Option<u32>,
    pub point: Point,
}

impl Place {
    /// Use this place as a meeting-point candidate.
    pub fn to_candidate(&self) -> Candidate {
        Candidate::discovered(self.name.clone(), self.point)
    }
}

/// A named coordinate, from geocoding or keyword search.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Place name for keyword hits, the address itself for geocoding hits
    pub name: String,
    pub address: String,
    pub point: Point,
}

/// A reverse-geocoded address.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    /// Lot-number address (falls back to the road address)
    pub address: String,
    pub road_address: Option<String>,
    pub building_name: Option<String>,
    /// Province / city
    pub region_1: String,
    /// District
    pub region_2: String,
    /// Neighbourhood
    pub region_3: String,
}

fn parse_point(x: &str, y: &str) -> Result<Point, ConversionError> {
    let invalid = || ConversionError::InvalidCoordinate {
        x: x.to_string(),
        y: y.to_string(),
    };
    let px: f64 = x.trim().parse().map_err(|_| invalid())?;
    let py: f64 = y.trim().parse().map_err(|_| invalid())?;
    Point::new(px, py).map_err(|_| invalid())
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

pub fn convert_place(doc: &PlaceDocument) -> Result<Place, ConversionError> {
    Ok(Place {
        id: doc.id.clone(),
        name: doc.place_name.clone(),
        category: doc.category_name.clone(),
        category_code: doc.category_group_code.clone(),
        phone: non_empty(&doc.phone),
        address: doc.address_name.clone(),
        road_address: non_empty(&doc.road_address_name),
        url: non_empty(&doc.place_url),
        distance_m: doc.distance.trim().parse().ok(),
        point: parse_point(&doc.x, &doc.y)?,
    })
}

pub fn convert_geocode(doc: &GeocodeDocument) -> Result<Location, ConversionError> {
    Ok(Location {
        name: doc.address_name.clone(),
        address: doc.address_name.clone(),
        point: parse_point(&doc.x, &doc.y)?,
    })
}

pub fn convert_address(doc: &AddressDocument) -> Result<Address, ConversionError> {
    let road_address = doc.road_address.as_ref();
    let (address, region_1, region_2, region_3) = match (&doc.address, road_address) {
        (Some(lot), _) => (
            lot.address_name.clone(),
            lot.region_1depth_name.clone(),
            lot.region_2depth_name.clone(),
            lot.region_3depth_name.clone(),
        ),
        (None, Some(road)) => (
            road.address_name.clone(),
            String::new(),
            String::new(),
            String::new(),
        ),
        (None, None) => return Err(ConversionError::MissingAddress),
    };

    Ok(Address {
        address,
        road_address: road_address.and_then(|r| non_empty(&r.address_name)),
        building_name: road_address.and_then(|r| non_empty(&r.building_name)),
        region_1,
        region_2,
        region_3,
    })
}

/// Merge exact-address geocoding hits with keyword hits.
///
/// Geocoding hits come first. Keyword hits at a coordinate already present
/// are dropped.
pub fn combine_geocode_and_keyword(geocoded: Vec<Location>, places: Vec<Place>) -> Vec<Location> {
    let mut seen = std::collections::HashSet::new();
    let keyword = places.into_iter().map(|p| Location {
        name: p.name,
        address: p.road_address.unwrap_or(p.address),
        point: p.point,
    });

    geocoded
        .into_iter()
        .chain(keyword)
        .filter(|loc| seen.insert(loc.point))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::types::{LotAddress, RoadAddress};

    fn place_doc(name: &str, x: &str, y: &str) -> PlaceDocument {
        PlaceDocument {
            id: "1".to_string(),
            place_name: name.to_string(),
            category_name: "교통,수송 > 지하철,전철".to_string(),
            category_group_code: "SW8".to_string(),
            phone: String::new(),
            address_name: "서울 강남구 역삼동 858".to_string(),
            road_address_name: "".to_string(),
            x: x.to_string(),
            y: y.to_string(),
            place_url: String::new(),
            distance: "120".to_string(),
        }
    }

    #[test]
    fn converts_place() {
        let place = convert_place(&place_doc("강남역 2호선", "127.028", "37.498")).unwrap();
        assert_eq!(place.name, "강남역 2호선");
        assert_eq!(place.point, Point::new(127.028, 37.498).unwrap());
        assert_eq!(place.distance_m, Some(120));
        assert_eq!(place.phone, None);
        assert_eq!(place.road_address, None);

        let candidate = place.to_candidate();
        assert!(!candidate.is_weighted);
        assert_eq!(candidate.point, place.point);
    }

    #[test]
    fn rejects_bad_coordinates() {
        let err = convert_place(&place_doc("X", "abc", "37.5")).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidCoordinate { .. }));

        assert!(convert_place(&place_doc("X", "NaN", "37.5")).is_err());
    }

    #[test]
    fn address_prefers_lot_and_keeps_road() {
        let doc = AddressDocument {
            address: Some(LotAddress {
                address_name: "서울 중구 봉래동2가 122-21".to_string(),
                region_1depth_name: "서울".to_string(),
                region_2depth_name: "중구".to_string(),
                region_3depth_name: "봉래동2가".to_string(),
            }),
            road_address: Some(RoadAddress {
                address_name: "서울 중구 한강대로 405".to_string(),
                building_name: "서울역".to_string(),
                zone_no: "04320".to_string(),
            }),
        };

        let address = convert_address(&doc).unwrap();
        assert_eq!(address.address, "서울 중구 봉래동2가 122-21");
        assert_eq!(address.road_address.as_deref(), Some("서울 중구 한강대로 405"));
        assert_eq!(address.building_name.as_deref(), Some("서울역"));
        assert_eq!(address.region_2, "중구");
    }

    #[test]
    fn address_missing_both_forms() {
        let doc = AddressDocument {
            address: None,
            road_address: None,
        };
        assert_eq!(convert_address(&doc), Err(ConversionError::MissingAddress));
    }

    #[test]
    fn combine_puts_geocoded_first_and_dedups() {
        let geocoded = vec![Location {
            name: "서울 강남구 역삼동 858".to_string(),
            address: "서울 강남구 역삼동 858".to_string(),
            point: Point::new(127.028, 37.498).unwrap(),
        }];
        let places = vec![
            convert_place(&place_doc("강남역", "127.028", "37.498")).unwrap(),
            convert_place(&place_doc("역삼역", "127.036", "37.500")).unwrap(),
        ];

        let combined = combine_geocode_and_keyword(geocoded, places);
        let names: Vec<&str> = combined.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["서울 강남구 역삼동 858", "역삼역"]);
    }
}
