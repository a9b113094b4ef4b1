//! Domain types for meeting-point resolution.
//!
//! This module contains the value types shared by the candidate generator,
//! the path resolver and the grading step. All types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod candidate;
mod error;
mod point;
mod route;

pub use candidate::{Candidate, CandidateSet};
pub use error::DomainError;
pub use point::{Point, Points};
pub use route::{RouteResult, RouteStrategy};
