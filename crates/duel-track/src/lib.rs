//! `duel-track`: closed-loop track geometry, generation, and lap tracking.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`track`]     | `Track`: validated closed centerline, width, checkpoints  |
//! | [`generator`] | `OvalGenerator`, `TrackGenConfig`, `SegmentKind`           |
//! | [`lap`]       | `LapTracker`, `LapEvent`                                   |
//! | [`error`]     | `TrackError`, `TrackResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `TrackGenConfig`.       |

pub mod error;
pub mod generator;
pub mod lap;
pub mod track;


pub use error::{TrackError, TrackResult};
pub use generator::{OvalGenerator, SegmentKind, TrackGenConfig};
pub use lap::{LapEvent, LapTracker};
pub use track::Track;
