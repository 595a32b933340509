//! Framework error type.
//!
//! Sub-crates define their own error enums (`TrackError`, `FuzzyError`, …)
//! and wrap `DuelError` as one variant via `#[from]` where they need it.

use thiserror::Error;

use crate::VehicleId;

/// The top-level error type for `duel-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DuelError {
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `duel-*` crates.
pub type DuelResult<T> = Result<T, DuelError>;
