//! Fluent builder for constructing a [`Race`], and the starting grid.

use duel_agent::SteeringPolicy;
use duel_core::{Point2, RaceConfig, VehicleId};
use duel_fuzzy::SpeedController;
use duel_track::{LapTracker, Track};
use duel_track::lap::DEFAULT_CAPTURE_WINDOW;
use duel_vehicle::Vehicle;
use tracing::debug;

use crate::{Race, RaceError, RaceResult, Racer};

/// Fluent builder for [`Race<P>`].
///
/// # Required inputs
///
/// - [`RaceConfig`]: tick limit, laps to win, snapshot interval, …
/// - [`Track`]: shared read-only by every racer
/// - [`SpeedController`]: built once, shared by every racer
/// - at least one `.racer(..)`
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                       |
/// |------------------------|-------------------------------|
/// | `.capture_window(w)`   | `DEFAULT_CAPTURE_WINDOW` (5)  |
///
/// All racers share one policy type `P`.  Mix policies with
/// `Box<dyn SteeringPolicy>`.
///
/// # Example
///
/// ```rust,ignore
/// let mut race = RaceBuilder::new(config, track, SpeedController::new()?)
///     .racer("red", red_car, HeuristicAgent::new(AgentConfig::cautious())?)
///     .racer("blue", blue_car, HeuristicAgent::new(AgentConfig::aggressive())?)
///     .build()?;
/// race.run(&mut NoopObserver)?;
/// ```
pub struct RaceBuilder<P: SteeringPolicy> {
    config:         RaceConfig,
    track:          Track,
    controller:     SpeedController,
    entries:        Vec<(String, Vehicle, P)>,
    capture_window: usize,
}

impl<P: SteeringPolicy> RaceBuilder<P> {
    /// Create a builder with all required shared inputs.
    pub fn new(config: RaceConfig, track: Track, controller: SpeedController) -> Self {
        Self {
            config,
            track,
            controller,
            entries: Vec::new(),
            capture_window: DEFAULT_CAPTURE_WINDOW,
        }
    }

    /// Add a racer.  Ids are assigned in call order, starting at 0.
    pub fn racer(mut self, name: impl Into<String>, vehicle: Vehicle, policy: P) -> Self {
        self.entries.push((name.into(), vehicle, policy));
        self
    }

    /// Checkpoint capture window, in centerline indices.
    pub fn capture_window(mut self, window: usize) -> Self {
        self.capture_window = window;
        self
    }

    /// Validate inputs, set up lap tracking, and return a ready-to-run
    /// [`Race`].
    pub fn build(self) -> RaceResult<Race<P>> {
        self.config.validate()?;
        if self.entries.is_empty() {
            return Err(RaceError::NoRacers);
        }

        let racers: Vec<Racer<P>> = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(i, (name, vehicle, policy))| Racer {
                id:       VehicleId(i as u32),
                name,
                on_track: self.track.is_on_track(vehicle.position()),
                laps:     LapTracker::with_window(&self.track, self.capture_window),
                vehicle,
                policy,
            })
            .collect();

        debug!(
            racers = racers.len(),
            track_points = self.track.point_count(),
            laps_to_win = self.config.laps_to_win,
            "race built"
        );

        Ok(Race {
            clock:      self.config.make_clock(),
            config:     self.config,
            track:      self.track,
            controller: self.controller,
            racers,
            winner:     None,
        })
    }
}

/// Start slots for `count` racers on the start line.
///
/// Slots sit on the perpendicular through centerline point 0, spread evenly
/// over the middle half of the track width, left to right.  Every slot faces
/// the local direction of travel.
pub fn starting_grid(track: &Track, count: usize) -> Vec<(Point2, f64)> {
    let heading = track.heading_at(0);
    let start = track.start_point();
    let (nx, ny) = (-heading.sin(), heading.cos());
    let spread = track.half_width() * 0.5;

    (0..count)
        .map(|k| {
            let offset = if count <= 1 {
                0.0
            } else {
                spread * (2.0 * k as f64 / (count - 1) as f64 - 1.0)
            };
            (Point2::new(start.x + nx * offset, start.y + ny * offset), heading)
        })
        .collect()
}
