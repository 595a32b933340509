//! The `SteeringPolicy` trait: the extension point for driver logic.

use duel_track::Track;
use duel_vehicle::{SteeringAction, Vehicle};

/// Pluggable steering decision.
///
/// Implement this trait to define how a racer picks its steering action each
/// tick.  `decide` receives the vehicle as it stands before the tick and the
/// shared read-only track.
///
/// # Thread safety
///
/// The race driver may call `decide` for several racers in parallel via
/// Rayon, so implementations must be `Send + Sync`.  A policy holds only
/// immutable configuration; anything that varies per tick lives in the
/// vehicle.
///
/// # Example
///
/// ```rust,ignore
/// struct HugInside;
///
/// impl SteeringPolicy for HugInside {
///     fn decide(&self, _vehicle: &Vehicle, _track: &Track) -> SteeringAction {
///         SteeringAction::Right
///     }
/// }
/// ```
pub trait SteeringPolicy: Send + Sync + 'static {
    /// Pick one of the three steering actions.  Must always return.
    fn decide(&self, vehicle: &Vehicle, track: &Track) -> SteeringAction;

    /// Short label used in logs and telemetry.
    fn name(&self) -> &str {
        "policy"
    }
}

impl<P: SteeringPolicy + ?Sized> SteeringPolicy for Box<P> {
    fn decide(&self, vehicle: &Vehicle, track: &Track) -> SteeringAction {
        (**self).decide(vehicle, track)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
