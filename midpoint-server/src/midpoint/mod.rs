//! Meeting-point resolution.
//!
//! This module answers: "given where everyone is, which station should we
//! meet at?"
//!
//! Resolution runs in three steps:
//! 1. Generate candidates: stations near the centroid of the inputs, plus
//!    the weighted-station registry, deduplicated by coordinate
//! 2. Resolve a route from every input to every candidate, consulting the
//!    path cache first
//! 3. Grade each candidate's row of travel times and pick the lowest score

mod candidates;
mod config;
mod error;
mod finder;
mod grade;
mod resolver;

pub use candidates::{PlaceSearch, generate};
pub use config::{DEFAULT_WEIGHTED_BONUS_SECS, GradingConfig};
pub use error::{FailureKind, MidpointError};
pub use finder::MidpointFinder;
pub use grade::{ScorePolicy, SumWithBonus, select};
pub use resolver::{PathResolver, ResultMatrix, TransitRouter};
