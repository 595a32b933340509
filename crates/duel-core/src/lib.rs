//! `duel-core`: foundational types for the `track_duel` racing simulation.
//!
//! This crate is a dependency of every other `duel-*` crate.  It has no
//! `duel-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`geo`]     | `Point2`, distance, nearest-point, curvature, heading helpers  |
//! | [`ids`]     | `VehicleId`, `CheckpointId`                                    |
//! | [`time`]    | `Tick`, `RaceClock`, `RaceConfig`                              |
//! | [`rng`]     | `SimRng` (seeded, used by track generation)                    |
//! | [`error`]   | `DuelError`, `DuelResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DuelError, DuelResult};
pub use geo::Point2;
pub use ids::{CheckpointId, VehicleId};
pub use rng::SimRng;
pub use time::{RaceClock, RaceConfig, Tick};
