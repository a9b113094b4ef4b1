//! Coordinate types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A validated coordinate pair.
///
/// `x` is the longitude and `y` the latitude, matching the convention of the
/// place and transit providers. Both components are finite, and `-0.0` is
/// normalised to `0.0`, so equality and hashing are by value: two points with
/// identical coordinates are the same entity for caching and deduplication.
///
/// # Examples
///
/// ```
/// use midpoint_server::domain::Point;
///
/// let gangnam = Point::new(127.027926, 37.497175).unwrap();
/// assert_eq!(gangnam.x(), 127.027926);
///
/// // Non-finite coordinates are rejected
/// assert!(Point::new(f64::NAN, 37.5).is_err());
/// assert!(Point::new(127.0, f64::INFINITY).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    x: f64,
    y: f64,
}

/// Unvalidated wire form of a point.
#[derive(Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

impl TryFrom<RawPoint> for Point {
    type Error = DomainError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Point::new(raw.x, raw.y)
    }
}

impl Point {
    /// Create a point, rejecting NaN and infinite components.
    pub fn new(x: f64, y: f64) -> Result<Self, DomainError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(DomainError::NonFiniteCoordinate { x, y });
        }

        // `-0.0 + 0.0 == 0.0`, which keeps bitwise hashing consistent with `==`
        Ok(Self {
            x: x + 0.0,
            y: y + 0.0,
        })
    }

    /// Longitude.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Latitude.
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The non-empty, ordered set of input locations for one resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Points(Vec<Point>);

impl Points {
    /// Wrap the caller's locations. A single location is degenerate but valid.
    pub fn new(points: Vec<Point>) -> Result<Self, DomainError> {
        if points.is_empty() {
            return Err(DomainError::EmptyPoints);
        }
        Ok(Self(points))
    }

    /// The arithmetic mean of all coordinates.
    pub fn centroid(&self) -> Point {
        let n = self.0.len() as f64;
        let (sum_x, sum_y) = self
            .0
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));

        Point {
            x: sum_x / n + 0.0,
            y: sum_y / n + 0.0,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Points {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The centroid lies within the bounding box of the inputs
        #[test]
        fn centroid_within_bounds(coords in prop::collection::vec((-180.0f64..180.0, -90.0f64..90.0), 1..20)) {
            let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y).unwrap()).collect();
            let min_x = coords.iter().map(|c| c.0).fold(f64::INFINITY, f64::min);
            let max_x = coords.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max);
            let min_y = coords.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);
            let max_y = coords.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max);

            let centroid = Points::new(points).unwrap().centroid();
            prop_assert!(centroid.x() >= min_x - 1e-9 && centroid.x() <= max_x + 1e-9);
            prop_assert!(centroid.y() >= min_y - 1e-9 && centroid.y() <= max_y + 1e-9);
        }

        /// Points built from the same components are equal
        #[test]
        fn equal_components_equal_points(x in -180.0f64..180.0, y in -90.0f64..90.0) {
            prop_assert_eq!(Point::new(x, y).unwrap(), Point::new(x, y).unwrap());
        }
    }
}
