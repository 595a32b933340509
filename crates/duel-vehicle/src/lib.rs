//! `duel-vehicle`: the vehicle kinematic model and its command types.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`vehicle`] | `Vehicle` (value-type state), `VehicleParams`, `TrackInfo`     |
//! | [`command`] | `SteeringAction`, `ThrottleCommand` (+ command thresholds)     |
//! | [`error`]   | `VehicleError`, `VehicleResult<T>`                             |
//!
//! # Movement model
//!
//! One call to [`Vehicle::advance`] is one tick: the vehicle moves `speed`
//! units along its heading.  Throttle and steering only change speed and
//! heading; they never move the vehicle by themselves.  There is no boundary
//! clamping: leaving the tarmac is detected by distance to the centerline,
//! not by screen bounds.
//!
//! `Vehicle` is `Copy`.  Lookahead search works on plain copies, so a
//! hypothetical future can never write back into the real vehicle.

pub mod command;
pub mod error;
pub mod vehicle;


pub use command::{SteeringAction, ThrottleCommand};
pub use error::{VehicleError, VehicleResult};
pub use vehicle::{TrackInfo, Vehicle, VehicleParams};
