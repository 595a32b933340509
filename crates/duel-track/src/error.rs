//! Track-subsystem error type.

use thiserror::Error;

/// Errors produced by `duel-track`.
///
/// All of them are construction-time failures: a `Track` that exists is
/// always usable by the decision core.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("centerline needs at least 2 distinct points, found {distinct}")]
    TooFewPoints { distinct: usize },

    #[error("centerline point {index} is not finite")]
    NonFinitePoint { index: usize },

    #[error("track width must be positive and finite, got {0}")]
    InvalidWidth(f64),

    #[error("invalid checkpoints: {0}")]
    InvalidCheckpoints(String),

    #[error("invalid generator configuration: {0}")]
    Generator(String),
}

pub type TrackResult<T> = Result<T, TrackError>;
