//! `duel-sim`: the race tick driver.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.max_ticks (or until someone wins):
//!   ① Decide, for every racer against the pre-tick state:
//!                track reading  (progress index, curvature, distance)
//!                speed command  SpeedController::acceleration_action
//!                steering       SteeringPolicy::decide
//!              (parallel with the `parallel` feature).
//!   ② Apply, in ascending VehicleId order:
//!                throttle → steer → advance → off-track check → lap tracking
//!   ③ Observe: snapshot every `output_interval_ticks`.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the decision phase on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use duel_agent::{AgentConfig, HeuristicAgent};
//! use duel_fuzzy::SpeedController;
//! use duel_sim::{NoopObserver, RaceBuilder, starting_grid};
//!
//! let grid = starting_grid(&track, 2);
//! let mut race = RaceBuilder::new(config, track, SpeedController::new()?)
//!     .racer("cautious", car_at(grid[0]), HeuristicAgent::new(AgentConfig::cautious())?)
//!     .racer("aggressive", car_at(grid[1]), HeuristicAgent::new(AgentConfig::aggressive())?)
//!     .build()?;
//! let outcome = race.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod race;


pub use builder::{RaceBuilder, starting_grid};
pub use error::{RaceError, RaceResult};
pub use observer::{NoopObserver, RaceObserver};
pub use race::{Race, RaceOutcome, Racer, RacerStatus, TickDecision};
