//! Error types for the repmax application.

use thiserror::Error;

/// Errors raised while validating user-supplied inputs.
///
/// The calculation engine itself is total and never fails; everything here is
/// caught at the CLI or HTTP boundary before the engine runs.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unknown exercise: {0}")]
    UnknownExercise(String),

    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("invalid plate size: {0}")]
    InvalidPlateSize(String),

    #[error("plate list must not be empty")]
    EmptyPlates,
}
