//! `duel-agent`: steering policies.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`policy`]    | `SteeringPolicy` trait                                            |
//! | [`config`]    | `AgentConfig`: per-agent weights and lookahead depth             |
//! | [`heuristic`] | `HeuristicAgent`: short-horizon lookahead search                 |
//! | [`straight`]  | `StraightPolicy`: never steers                                   |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                                    |
//!
//! # Design notes
//!
//! The race driver runs every tick in two phases:
//!
//! 1. **Decision phase** (optionally parallel): for every racer, call
//!    `SteeringPolicy::decide` against the pre-tick vehicle and the shared
//!    track.  All reads, no mutation.
//!
//! 2. **Apply phase** (sequential): apply throttle, steering and movement to
//!    each vehicle in id order.
//!
//! Policies therefore only need to be `Send + Sync`.  Lookahead works on
//! `Copy`s of the vehicle, so it never touches the real one.

pub mod config;
pub mod error;
pub mod heuristic;
pub mod policy;
pub mod straight;

#[cfg(test)]
mod tests;

pub use config::AgentConfig;
pub use error::{AgentError, AgentResult};
pub use heuristic::{ALIGNMENT_WEIGHT, HEADING_LOOKAHEAD_POINTS, HeuristicAgent};
pub use policy::SteeringPolicy;
pub use straight::StraightPolicy;
