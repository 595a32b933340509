//! Plain data row types written by output backends.

use duel_sim::TickDecision;
use duel_vehicle::{SteeringAction, ThrottleCommand, Vehicle};

/// One racer's state and decision at one tick.
///
/// Position, heading and speed are the pre-tick values the decision was
/// taken on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryRow {
    pub tick:           u64,
    pub vehicle_id:     u32,
    pub x:              f64,
    pub y:              f64,
    pub heading:        f64,
    pub speed:          f64,
    pub progress_index: u64,
    pub curvature:      f64,
    pub dist_to_center: f64,
    /// Raw speed-controller output in `[-1, 1]`.
    pub command:        f64,
    pub throttle:       ThrottleCommand,
    pub steering:       SteeringAction,
}

impl TelemetryRow {
    pub fn new(tick: u64, vehicle: &Vehicle, decision: &TickDecision) -> Self {
        Self {
            tick,
            vehicle_id:     decision.vehicle.0,
            x:              vehicle.x(),
            y:              vehicle.y(),
            heading:        vehicle.heading(),
            speed:          vehicle.speed(),
            progress_index: decision.info.progress_index as u64,
            curvature:      decision.info.curvature,
            dist_to_center: decision.info.dist_to_center,
            command:        decision.command,
            throttle:       decision.throttle,
            steering:       decision.steering,
        }
    }
}

/// One completed lap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapRow {
    pub vehicle_id: u32,
    /// Lap number, counting from 1.
    pub lap:        u32,
    /// Tick on which the lap line was crossed.
    pub tick:       u64,
    /// Ticks since the previous lap (or since tick 0 for the first lap).
    pub lap_ticks:  u64,
}
