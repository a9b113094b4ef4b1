//! Meeting-point resolution errors.

use crate::domain::Point;
use crate::places::PlaceError;
use crate::transit::TransitError;

/// Broad class of a resolution failure, as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// An external collaborator was unreachable or answered badly
    RequesterFailure,
    /// There was nothing to choose from
    NoCandidateFound,
    /// The result matrix was handed over with a missing cell
    Internal,
}

/// Error from meeting-point resolution.
#[derive(Debug, thiserror::Error)]
pub enum MidpointError {
    /// Station search around the centroid failed
    #[error("station search failed: {0}")]
    PlaceRequest(#[from] PlaceError),

    /// Routing failed for one (source, target) pair
    #[error("route search from {from} to {to} failed: {source}")]
    RouteRequest {
        from: Point,
        to: Point,
        #[source]
        source: TransitError,
    },

    /// The candidate set was empty
    #[error("no candidate meeting point found")]
    NoCandidateFound,

    /// A candidate was graded without a route from every source
    #[error("routes to candidate at {target} are incomplete")]
    IncompleteRoutes { target: Point },
}

impl MidpointError {
    pub fn kind(&self) -> FailureKind {
        match self {
            MidpointError::PlaceRequest(_) | MidpointError::RouteRequest { .. } => {
                FailureKind::RequesterFailure
            }
            MidpointError::NoCandidateFound => FailureKind::NoCandidateFound,
            MidpointError::IncompleteRoutes { .. } => FailureKind::Internal,
        }
    }
}
