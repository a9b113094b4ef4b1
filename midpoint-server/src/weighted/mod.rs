//! Weighted meeting stations.
//!
//! Some stations are major hubs that make better meeting points than their
//! raw travel times suggest. They are always offered as candidates and
//! receive a scoring bonus during grading.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{Candidate, DomainError, Point};

/// Error loading a station registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read station registry: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse station registry: {0}")]
    Json(#[from] serde_json::Error),

    #[error("station {name} has an invalid coordinate: {source}")]
    InvalidStation {
        name: String,
        #[source]
        source: DomainError,
    },
}

/// Ordered registry of weighted stations, keyed by name.
///
/// Names are unique. Re-adding a name moves its coordinate but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedStations {
    stations: Vec<(String, Point)>,
}

/// One entry of the registry file.
#[derive(Debug, Deserialize)]
struct StationEntry {
    name: String,
    x: f64,
    y: f64,
}

impl WeightedStations {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station, replacing the coordinate of an existing name.
    pub fn add(&mut self, name: impl Into<String>, point: Point) {
        let name = name.into();
        match self.stations.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = point,
            None => self.stations.push((name, point)),
        }
    }

    /// Load a registry from a JSON array of `{"name", "x", "y"}` objects.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a registry from JSON text.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let entries: Vec<StationEntry> = serde_json::from_str(json)?;

        let mut registry = Self::new();
        for entry in entries {
            let point = Point::new(entry.x, entry.y).map_err(|source| {
                RegistryError::InvalidStation {
                    name: entry.name.clone(),
                    source,
                }
            })?;
            registry.add(entry.name, point);
        }
        Ok(registry)
    }

    /// All stations in registry order.
    pub fn list(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.stations.iter().map(|(name, point)| (name.as_str(), *point))
    }

    /// Get the coordinate of a station by name.
    pub fn get(&self, name: &str) -> Option<Point> {
        self.stations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, point)| *point)
    }

    /// Check if a station name is in the registry.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The registry as weighted candidates, in registry order.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.list()
            .map(|(name, point)| Candidate::weighted(name, point))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Builder for creating a station registry.
///
/// Entries with non-finite coordinates are skipped.
#[derive(Debug, Default)]
pub struct WeightedStationsBuilder {
    inner: WeightedStations,
}

impl WeightedStationsBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn add(mut self, name: &str, x: f64, y: f64) -> Self {
        if let Ok(point) = Point::new(x, y) {
            self.inner.add(name, point);
        }
        self
    }

    /// Build the registry.
    pub fn build(self) -> WeightedStations {
        self.inner
    }
}

/// Default registry of Seoul transfer hubs.
pub fn seoul_hubs() -> WeightedStations {
    WeightedStationsBuilder::new()
        .add("강남역", 127.027926, 37.497175)
        .add("홍대입구역", 126.923778, 37.557192)
        .add("서울역", 126.972559, 37.554648)
        .add("잠실역", 127.100311, 37.513282)
        .add("사당역", 126.981633, 37.476559)
        .add("건대입구역", 127.070149, 37.540373)
        .build()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    #[test]
    fn empty_registry() {
        let registry = WeightedStations::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get("강남역").is_none());
    }

    #[test]
    fn add_and_lookup() {
        let mut registry = WeightedStations::new();
        registry.add("A", p(1.0, 2.0));
        registry.add("B", p(3.0, 4.0));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("A"), Some(p(1.0, 2.0)));
        assert!(registry.contains("B"));
        assert!(!registry.contains("C"));
    }

    #[test]
    fn re_adding_keeps_position() {
        let mut registry = WeightedStations::new();
        registry.add("A", p(1.0, 2.0));
        registry.add("B", p(3.0, 4.0));
        registry.add("A", p(5.0, 6.0));

        let names: Vec<&str> = registry.list().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(registry.get("A"), Some(p(5.0, 6.0)));
    }

    #[test]
    fn candidates_are_weighted() {
        let registry = WeightedStationsBuilder::new()
            .add("A", 1.0, 2.0)
            .add("B", 3.0, 4.0)
            .build();

        let candidates = registry.candidates();
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.is_weighted));
        assert_eq!(candidates[0].name, "A");
    }

    #[test]
    fn builder_skips_non_finite() {
        let registry = WeightedStationsBuilder::new()
            .add("bad", f64::NAN, 37.5)
            .add("good", 127.0, 37.5)
            .build();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("good"));
    }

    #[test]
    fn seoul_hubs_exist() {
        let registry = seoul_hubs();
        assert_eq!(registry.len(), 6);
        assert!(registry.contains("강남역"));
        assert!(registry.contains("서울역"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Hub", "x": 127.0, "y": 37.5}}, {{"name": "Other", "x": 126.9, "y": 37.4}}]"#
        )
        .unwrap();

        let registry = WeightedStations::load(file.path()).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("Hub"), Some(p(127.0, 37.5)));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = WeightedStations::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(RegistryError::Io(_))));
    }

    #[test]
    fn load_malformed_json() {
        let result = WeightedStations::from_json(r#"[{"name": "Hub"}]"#);
        assert!(matches!(result, Err(RegistryError::Json(_))));
    }
}
