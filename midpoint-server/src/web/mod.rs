//! Web layer for the meeting-point server.
//!
//! Provides JSON endpoints for resolving meeting points and for the
//! location lookups the client uses to pick starting points.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, LiveFinder};
