//! Per-vehicle kinematic state.

use duel_core::Point2;
use duel_core::geo::distance;
use duel_track::Track;

use crate::{SteeringAction, ThrottleCommand, VehicleError, VehicleResult};

// ── VehicleParams ─────────────────────────────────────────────────────────────

/// Fixed per-vehicle tuning, set at construction and never changed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VehicleParams {
    /// Speed ceiling, units per tick.
    pub max_speed: f64,
    /// Speed gained per `accelerate()`.
    pub acceleration_rate: f64,
    /// Speed lost per `brake()`.
    pub brake_rate: f64,
    /// Heading change per `turn_left()`/`turn_right()`, radians.
    pub turn_rate: f64,
    /// Speed lost per `maintain()`.
    pub passive_friction: f64,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            max_speed:         8.0,
            acceleration_rate: 0.3,
            brake_rate:        0.4,
            turn_rate:         0.08,
            passive_friction:  0.05,
        }
    }
}

impl VehicleParams {
    pub fn validate(&self) -> VehicleResult<()> {
        let fields = [
            ("max_speed",         self.max_speed),
            ("acceleration_rate", self.acceleration_rate),
            ("brake_rate",        self.brake_rate),
            ("turn_rate",         self.turn_rate),
            ("passive_friction",  self.passive_friction),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(VehicleError::InvalidParam { name, value });
            }
        }
        Ok(())
    }
}

// ── TrackInfo ─────────────────────────────────────────────────────────────────

/// The per-tick reading of a vehicle against the track.
///
/// Derived, consumed, and dropped within one decision tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackInfo {
    /// Index of the nearest centerline point.  Used as a progress proxy.
    pub progress_index: usize,
    /// Curvature at `progress_index`, in `[0, 1]`.
    pub curvature: f64,
    pub dist_to_center: f64,
    pub closest_point: Point2,
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// Position, heading and speed of one race participant.
///
/// Invariant: `0 ≤ speed ≤ params.max_speed`, maintained by clamping in
/// every mutator.  Heading accumulates without wrapping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vehicle {
    position: Point2,
    heading:  f64,
    speed:    f64,
    params:   VehicleParams,
}

impl Vehicle {
    /// A stationary vehicle at `position` facing `heading`.
    pub fn new(position: Point2, heading: f64, params: VehicleParams) -> VehicleResult<Self> {
        params.validate()?;
        if !position.x.is_finite() || !position.y.is_finite() || !heading.is_finite() {
            return Err(VehicleError::NonFinitePosition);
        }
        Ok(Self { position, heading, speed: 0.0, params })
    }

    /// Same vehicle with its speed set (clamped to `[0, max_speed]`).
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.set_speed(speed);
        self
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Point2 {
        self.position
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn params(&self) -> &VehicleParams {
        &self.params
    }

    // ── Writes ────────────────────────────────────────────────────────────

    pub fn set_position(&mut self, position: Point2) {
        self.position = position;
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
    }

    /// Set speed, clamped into `[0, max_speed]`.  NaN stops the vehicle.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = if speed.is_nan() { 0.0 } else { speed.clamp(0.0, self.params.max_speed) };
    }

    // ── Kinematics ────────────────────────────────────────────────────────

    pub fn accelerate(&mut self) {
        self.speed = (self.speed + self.params.acceleration_rate).min(self.params.max_speed);
    }

    pub fn brake(&mut self) {
        self.speed = (self.speed - self.params.brake_rate).max(0.0);
    }

    /// Coast: passive friction only.
    pub fn maintain(&mut self) {
        self.speed = (self.speed - self.params.passive_friction).max(0.0);
    }

    pub fn turn_left(&mut self) {
        self.heading -= self.params.turn_rate;
    }

    pub fn turn_right(&mut self) {
        self.heading += self.params.turn_rate;
    }

    /// Move one tick along the current heading.
    pub fn advance(&mut self) {
        self.position.x += self.speed * self.heading.cos();
        self.position.y += self.speed * self.heading.sin();
    }

    pub fn steer(&mut self, action: SteeringAction) {
        match action {
            SteeringAction::Left     => self.turn_left(),
            SteeringAction::Right    => self.turn_right(),
            SteeringAction::Straight => {}
        }
    }

    pub fn apply_throttle(&mut self, throttle: ThrottleCommand) {
        match throttle {
            ThrottleCommand::Accelerate => self.accelerate(),
            ThrottleCommand::Brake      => self.brake(),
            ThrottleCommand::Maintain   => self.maintain(),
        }
    }

    /// Map a continuous speed-controller command to a throttle action and
    /// apply it.  Returns the action taken.
    pub fn apply_command(&mut self, command: f64) -> ThrottleCommand {
        let throttle = ThrottleCommand::from_command(command);
        self.apply_throttle(throttle);
        throttle
    }

    // ── Track readings ────────────────────────────────────────────────────

    /// Project onto the centerline: progress index, curvature there, and
    /// distance to the nearest centerline point.
    pub fn track_info(&self, track: &Track) -> TrackInfo {
        let (closest_point, progress_index) = track.closest_point(self.position);
        TrackInfo {
            progress_index,
            curvature: track.curvature_at(progress_index),
            dist_to_center: distance(self.position, closest_point),
            closest_point,
        }
    }
}
