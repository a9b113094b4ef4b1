//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from API/IO errors.

/// Domain-level errors for input validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A coordinate component was NaN or infinite
    #[error("coordinate must be finite, got ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    /// Meeting-point resolution needs at least one location
    #[error("at least one location is required")]
    EmptyPoints,
}
