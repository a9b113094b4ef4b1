//! Candidate meeting locations.

use std::collections::HashMap;

use serde::Serialize;

use super::Point;

/// A named location eligible to be the meeting point.
///
/// Weighted candidates come from the curated station registry; the others
/// were discovered near the centroid of the input locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Station or place name
    pub name: String,
    /// Location of the candidate
    pub point: Point,
    /// Whether the candidate receives the weighted-station bonus
    pub is_weighted: bool,
}

impl Candidate {
    /// A candidate found by searching around the centroid.
    pub fn discovered(name: impl Into<String>, point: Point) -> Self {
        Self {
            name: name.into(),
            point,
            is_weighted: false,
        }
    }

    /// A candidate drawn from the weighted-station registry.
    pub fn weighted(name: impl Into<String>, point: Point) -> Self {
        Self {
            name: name.into(),
            point,
            is_weighted: true,
        }
    }
}

/// Ordered, coordinate-unique collection of candidates.
///
/// No two entries share a coordinate. When a discovered and a weighted
/// candidate coincide the weighted one is kept, at the position where the
/// coordinate was first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Build a set from candidates in discovery order, deduplicating by coordinate.
    pub fn from_candidates(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        let mut result: Vec<Candidate> = Vec::new();
        let mut by_point: HashMap<Point, usize> = HashMap::new();

        for candidate in candidates {
            match by_point.get(&candidate.point) {
                Some(&idx) => {
                    if candidate.is_weighted && !result[idx].is_weighted {
                        result[idx] = candidate;
                    }
                }
                None => {
                    by_point.insert(candidate.point, result.len());
                    result.push(candidate);
                }
            }
        }

        Self { candidates: result }
    }

    /// Look up the candidate at a coordinate.
    pub fn get(&self, point: &Point) -> Option<&Candidate> {
        self.candidates.iter().find(|c| &c.point == point)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    #[test]
    fn keeps_discovery_order() {
        let set = CandidateSet::from_candidates(vec![
            Candidate::discovered("Sadang", p(126.98, 37.47)),
            Candidate::discovered("Gangnam", p(127.02, 37.49)),
            Candidate::weighted("Seoul", p(126.97, 37.55)),
        ]);

        let names: Vec<&str> = set.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Sadang", "Gangnam", "Seoul"]);
    }

    #[test]
    fn weighted_wins_on_collision() {
        let set = CandidateSet::from_candidates(vec![
            Candidate::discovered("Gangnam Stn. Line 2", p(127.02, 37.49)),
            Candidate::discovered("Yeoksam", p(127.03, 37.50)),
            Candidate::weighted("Gangnam", p(127.02, 37.49)),
        ]);

        assert_eq!(set.len(), 2);
        let first = set.iter().next().unwrap();
        assert_eq!(first.name, "Gangnam");
        assert!(first.is_weighted);
    }

    #[test]
    fn discovered_never_replaces_weighted() {
        let set = CandidateSet::from_candidates(vec![
            Candidate::weighted("Gangnam", p(127.02, 37.49)),
            Candidate::discovered("Gangnam Stn. Line 2", p(127.02, 37.49)),
        ]);

        assert_eq!(set.len(), 1);
        assert!(set.get(&p(127.02, 37.49)).unwrap().is_weighted);
    }

    #[test]
    fn first_of_equal_duplicates_kept() {
        let set = CandidateSet::from_candidates(vec![
            Candidate::discovered("A", p(1.0, 1.0)),
            Candidate::discovered("B", p(1.0, 1.0)),
        ]);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&p(1.0, 1.0)).unwrap().name, "A");
    }

    #[test]
    fn empty_input() {
        let set = CandidateSet::from_candidates(Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
