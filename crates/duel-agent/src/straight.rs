//! A steering policy that never turns.

use duel_track::Track;
use duel_vehicle::{SteeringAction, Vehicle};

use crate::SteeringPolicy;

/// A [`SteeringPolicy`] that always returns [`SteeringAction::Straight`].
///
/// Useful as a baseline in tests, or to exercise the throttle path alone.
pub struct StraightPolicy;

impl SteeringPolicy for StraightPolicy {
    fn decide(&self, _vehicle: &Vehicle, _track: &Track) -> SteeringAction {
        SteeringAction::Straight
    }

    fn name(&self) -> &str {
        "straight"
    }
}
