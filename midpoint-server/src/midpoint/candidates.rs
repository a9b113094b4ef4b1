//! Candidate generation around the centroid of the input locations.

use std::future::Future;

use tracing::debug;

use crate::domain::{Candidate, CandidateSet, Point, Points};
use crate::places::PlaceError;
use crate::weighted::WeightedStations;

use super::error::MidpointError;

/// Source of transit stations near a point.
pub trait PlaceSearch: Send + Sync {
    /// Stations around `point`, nearest first.
    fn nearby_stations(
        &self,
        point: Point,
    ) -> impl Future<Output = Result<Vec<Candidate>, PlaceError>> + Send;
}

/// Build the candidate set for a group of locations.
///
/// Stations found near the centroid come first, then every registry station.
/// A discovered station whose name is in the registry counts as weighted.
pub async fn generate<P: PlaceSearch>(
    places: &P,
    registry: &WeightedStations,
    points: &Points,
) -> Result<CandidateSet, MidpointError> {
    let centre = points.centroid();
    let discovered = places.nearby_stations(centre).await?;
    debug!(%centre, found = discovered.len(), "stations near centroid");

    let discovered = discovered.into_iter().map(|candidate| {
        if registry.contains(&candidate.name) {
            Candidate::weighted(candidate.name, candidate.point)
        } else {
            candidate
        }
    });

    Ok(CandidateSet::from_candidates(
        discovered.chain(registry.candidates()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::MockPlaceSearch;
    use crate::weighted::WeightedStationsBuilder;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    #[tokio::test]
    async fn discovered_then_registry() {
        let places = MockPlaceSearch::with_stations(vec![
            Candidate::discovered("Near1", p(1.0, 1.0)),
            Candidate::discovered("Near2", p(2.0, 2.0)),
        ]);
        let registry = WeightedStationsBuilder::new().add("Hub", 9.0, 9.0).build();
        let points = Points::new(vec![p(0.0, 0.0), p(2.0, 2.0)]).unwrap();

        let set = generate(&places, &registry, &points).await.unwrap();
        let names: Vec<&str> = set.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Near1", "Near2", "Hub"]);
        assert!(set.iter().last().unwrap().is_weighted);
        assert_eq!(places.call_count(), 1);
    }

    #[tokio::test]
    async fn registry_wins_on_shared_coordinate() {
        let places = MockPlaceSearch::with_stations(vec![
            Candidate::discovered("Near", p(1.0, 1.0)),
            Candidate::discovered("Same spot", p(9.0, 9.0)),
        ]);
        let registry = WeightedStationsBuilder::new().add("Hub", 9.0, 9.0).build();
        let points = Points::new(vec![p(0.0, 0.0)]).unwrap();

        let set = generate(&places, &registry, &points).await.unwrap();
        assert_eq!(set.len(), 2);

        let hub = set.get(&p(9.0, 9.0)).unwrap();
        assert!(hub.is_weighted);
        assert_eq!(hub.name, "Hub");
    }

    #[tokio::test]
    async fn discovered_registry_name_is_weighted() {
        let places =
            MockPlaceSearch::with_stations(vec![Candidate::discovered("Hub", p(9.0, 9.001))]);
        let registry = WeightedStationsBuilder::new().add("Hub", 9.0, 9.0).build();
        let points = Points::new(vec![p(0.0, 0.0)]).unwrap();

        let set = generate(&places, &registry, &points).await.unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|c| c.is_weighted));
    }

    #[tokio::test]
    async fn empty_search_and_registry() {
        let places = MockPlaceSearch::with_stations(Vec::new());
        let points = Points::new(vec![p(0.0, 0.0)]).unwrap();

        let set = generate(&places, &WeightedStations::new(), &points)
            .await
            .unwrap();
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn search_failure_is_requester_failure() {
        let places = MockPlaceSearch::failing();
        let points = Points::new(vec![p(0.0, 0.0)]).unwrap();

        let err = generate(&places, &WeightedStations::new(), &points)
            .await
            .unwrap_err();
        assert!(matches!(err, MidpointError::PlaceRequest(_)));
    }
}
