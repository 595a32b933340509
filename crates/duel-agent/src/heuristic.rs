//! Lookahead steering: simulate each action a few ticks ahead and keep the
//! best-scoring one.

use duel_core::geo::normalize_angle;
use duel_track::Track;
use duel_vehicle::{SteeringAction, Vehicle};
use tracing::debug;

use crate::{AgentConfig, AgentResult, SteeringPolicy};

/// Centerline points ahead used for the heading-alignment term.
pub const HEADING_LOOKAHEAD_POINTS: usize = 10;

/// Score lost per radian of heading error.
pub const ALIGNMENT_WEIGHT: f64 = 0.5;

/// Greedy short-horizon search over the three steering actions.
///
/// For each candidate in [`SteeringAction::ALL`] order, a copy of the vehicle
/// holds that action for `lookahead_depth` ticks (speed unchanged), and the
/// end state is scored by [`score_state`](Self::score_state).  The strictly
/// greatest score wins; ties keep the earlier candidate, and if nothing
/// beats `-inf` (every score NaN) the agent goes straight.
#[derive(Clone, Debug)]
pub struct HeuristicAgent {
    name:   String,
    config: AgentConfig,
}

impl HeuristicAgent {
    pub fn new(config: AgentConfig) -> AgentResult<Self> {
        Self::named("heuristic", config)
    }

    pub fn named(name: impl Into<String>, config: AgentConfig) -> AgentResult<Self> {
        config.validate()?;
        Ok(Self { name: name.into(), config })
    }

    #[inline]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Best steering action for `vehicle` on `track`.
    pub fn decide_action(&self, vehicle: &Vehicle, track: &Track) -> SteeringAction {
        let scores = self.scores(vehicle, track);

        let mut best_action = SteeringAction::Straight;
        let mut best_score = f64::NEG_INFINITY;
        for (action, score) in SteeringAction::ALL.into_iter().zip(scores) {
            if score > best_score {
                best_score = score;
                best_action = action;
            }
        }

        debug!(
            agent = %self.name,
            left = scores[0],
            right = scores[1],
            straight = scores[2],
            chosen = %best_action,
            "steering decision"
        );
        best_action
    }

    /// Scores of every candidate, in [`SteeringAction::ALL`] order.
    pub fn scores(&self, vehicle: &Vehicle, track: &Track) -> [f64; 3] {
        SteeringAction::ALL.map(|action| self.evaluate_action(vehicle, track, action))
    }

    /// Score of holding `action` for `lookahead_depth` ticks.
    ///
    /// Works on a copy; `vehicle` itself is never modified.
    pub fn evaluate_action(&self, vehicle: &Vehicle, track: &Track, action: SteeringAction) -> f64 {
        let mut sim = *vehicle;
        for _ in 0..self.config.lookahead_depth {
            sim.steer(action);
            sim.advance();
        }
        self.score_state(&sim, track)
    }

    /// Heuristic value of a vehicle state.
    ///
    /// Higher centerline index is treated as more progress, so a state just
    /// past the start/finish seam scores lower than one just before it.
    pub fn score_state(&self, vehicle: &Vehicle, track: &Track) -> f64 {
        let info = vehicle.track_info(track);
        let cfg = &self.config;

        let progress = cfg.progress_weight * info.progress_index as f64;
        let centering = -cfg.centering_weight * info.dist_to_center;
        let off_track = if info.dist_to_center > track.half_width() {
            -cfg.off_track_penalty
        } else {
            0.0
        };
        let target = track.future_heading(info.progress_index, HEADING_LOOKAHEAD_POINTS);
        let alignment = -ALIGNMENT_WEIGHT * normalize_angle(vehicle.heading() - target).abs();

        progress + centering + off_track + alignment
    }
}

impl SteeringPolicy for HeuristicAgent {
    fn decide(&self, vehicle: &Vehicle, track: &Track) -> SteeringAction {
        self.decide_action(vehicle, track)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
