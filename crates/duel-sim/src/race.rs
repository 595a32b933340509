//! The `Race` struct and its tick loop.

use duel_agent::SteeringPolicy;
use duel_core::{DuelError, RaceClock, RaceConfig, Tick, VehicleId};
use duel_fuzzy::SpeedController;
use duel_track::{LapEvent, LapTracker, Track};
use duel_vehicle::{SteeringAction, ThrottleCommand, TrackInfo, Vehicle};
use tracing::{debug, info, warn};

use crate::{RaceObserver, RaceResult};

// ── Per-racer state ───────────────────────────────────────────────────────────

/// One participant: its vehicle, its policy, and its lap progress.
pub struct Racer<P> {
    pub id:       VehicleId,
    pub name:     String,
    pub vehicle:  Vehicle,
    pub policy:   P,
    pub laps:     LapTracker,
    /// Whether the vehicle was within half the track width after the last
    /// tick.
    pub on_track: bool,
}

/// Read-only post-tick view of one racer, passed to snapshot observers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RacerStatus {
    pub id:       VehicleId,
    pub vehicle:  Vehicle,
    pub laps:     u32,
    pub on_track: bool,
}

/// Everything decided for one racer in one tick, before anything moves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickDecision {
    pub vehicle:  VehicleId,
    /// Reading of the pre-tick vehicle against the track.
    pub info:     TrackInfo,
    /// Speed-controller output in `[-1, 1]`.
    pub command:  f64,
    pub throttle: ThrottleCommand,
    pub steering: SteeringAction,
}

/// Result of a finished (or cut-off) race.
#[derive(Clone, Debug, PartialEq)]
pub struct RaceOutcome {
    /// First racer to reach `laps_to_win`; lowest id on a same-tick finish.
    /// `None` if the tick limit was hit first.
    pub winner:     Option<VehicleId>,
    /// The tick the race stopped at.
    pub final_tick: Tick,
    /// Completed laps per racer, indexed by `VehicleId`.
    pub laps:       Vec<u32>,
}

// ── Race ──────────────────────────────────────────────────────────────────────

/// The race runner.
///
/// `Race<P>` holds the shared track and speed controller plus every racer,
/// and drives the two-phase tick loop:
///
/// 1. **Decision phase** (optionally parallel with the `parallel` feature):
///    read each vehicle against the track, ask the speed controller for a
///    command and the policy for a steering action.  Nothing is mutated, so
///    every racer decides on the same pre-tick world.
/// 2. **Apply phase** (sequential, ascending `VehicleId` for determinism):
///    throttle, steer, advance, then update the off-track flag and lap
///    tracker from the new position.
///
/// Create via [`RaceBuilder`][crate::RaceBuilder].
pub struct Race<P: SteeringPolicy> {
    /// Tick limit, laps to win, snapshot interval, …
    pub config: RaceConfig,

    /// Race clock.
    pub clock: RaceClock,

    /// The track.  Immutable for the whole race.
    pub track: Track,

    /// Shared speed controller.
    pub controller: SpeedController,

    /// Racers in id order.
    pub racers: Vec<Racer<P>>,

    /// Set on the tick the first racer reaches `laps_to_win`.
    pub winner: Option<VehicleId>,
}

impl<P: SteeringPolicy> Race<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until a racer completes `config.laps_to_win` laps or the clock
    /// reaches `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: RaceObserver>(&mut self, observer: &mut O) -> RaceResult<RaceOutcome> {
        info!(
            racers = self.racers.len(),
            laps_to_win = self.config.laps_to_win,
            max_ticks = self.config.max_ticks,
            "race start"
        );

        while self.winner.is_none() && self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }

        let outcome = self.outcome();
        match outcome.winner {
            Some(id) => info!(
                winner = %self.racers[id.index()].name,
                tick = %outcome.final_tick,
                secs = self.clock.elapsed_secs(),
                "race won"
            ),
            None => info!(tick = %outcome.final_tick, laps = ?outcome.laps, "tick limit reached, no winner"),
        }
        observer.on_race_end(&outcome);
        Ok(outcome)
    }

    /// Run exactly `n` ticks from the current position.
    ///
    /// The tick limit does not apply.  A finisher is still recorded in
    /// `winner` but does not stop stepping, and laps keep counting.
    pub fn run_ticks<O: RaceObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Current result without advancing.
    pub fn outcome(&self) -> RaceOutcome {
        RaceOutcome {
            winner:     self.winner,
            final_tick: self.clock.current_tick,
            laps:       self.racers.iter().map(|r| r.laps.laps()).collect(),
        }
    }

    /// Look up a racer by id.
    pub fn racer(&self, id: VehicleId) -> RaceResult<&Racer<P>> {
        self.racers
            .get(id.index())
            .ok_or_else(|| DuelError::VehicleNotFound(id).into())
    }

    /// Post-tick view of every racer, in id order.
    pub fn status(&self) -> Vec<RacerStatus> {
        self.racers
            .iter()
            .map(|r| RacerStatus {
                id:       r.id,
                vehicle:  r.vehicle,
                laps:     r.laps.laps(),
                on_track: r.on_track,
            })
            .collect()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: RaceObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let decisions = self.decide_all();
        self.apply(now, &decisions, observer);

        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0 % interval == 0 {
            observer.on_snapshot(now, &self.status());
        }

        self.clock.advance();
    }

    /// Decision phase.  With the `parallel` Cargo feature the racers are
    /// evaluated on Rayon's thread pool; output order is id order either way.
    fn decide_all(&self) -> Vec<TickDecision> {
        let track = &self.track;
        let controller = &self.controller;

        #[cfg(not(feature = "parallel"))]
        {
            self.racers
                .iter()
                .map(|racer| decide(racer, track, controller))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.racers
                .par_iter()
                .map(|racer| decide(racer, track, controller))
                .collect()
        }
    }

    /// Apply phase: mutate each vehicle in ascending id order.
    fn apply<O: RaceObserver>(&mut self, now: Tick, decisions: &[TickDecision], observer: &mut O) {
        let laps_to_win = self.config.laps_to_win;

        for (racer, decision) in self.racers.iter_mut().zip(decisions) {
            observer.on_decision(now, &racer.vehicle, decision);

            racer.vehicle.apply_throttle(decision.throttle);
            racer.vehicle.steer(decision.steering);
            racer.vehicle.advance();

            let (closest, progress) = self.track.closest_point(racer.vehicle.position());
            let on_track = racer.vehicle.position().distance_to(closest) <= self.track.half_width();
            if racer.on_track && !on_track {
                warn!(racer = %racer.name, tick = %now, progress, "left the track");
            } else if !racer.on_track && on_track {
                debug!(racer = %racer.name, tick = %now, progress, "back on track");
            }
            racer.on_track = on_track;

            match racer.laps.observe(progress) {
                LapEvent::None => {}
                LapEvent::Checkpoint(cp) => {
                    debug!(racer = %racer.name, tick = %now, checkpoint = %cp, "checkpoint");
                    observer.on_checkpoint(now, racer.id, cp);
                }
                LapEvent::LapCompleted(lap) => {
                    info!(racer = %racer.name, tick = %now, lap, "lap completed");
                    observer.on_lap(now, racer.id, lap);
                    if lap >= laps_to_win && self.winner.is_none() {
                        self.winner = Some(racer.id);
                    }
                }
            }
        }
    }
}

/// One racer's decision against the pre-tick world.  Pure.
fn decide<P: SteeringPolicy>(
    racer:      &Racer<P>,
    track:      &Track,
    controller: &SpeedController,
) -> TickDecision {
    let info = racer.vehicle.track_info(track);
    let command = controller.acceleration_action(racer.vehicle.speed(), info.curvature);
    let steering = racer.policy.decide(&racer.vehicle, track);
    TickDecision {
        vehicle: racer.id,
        info,
        command,
        throttle: ThrottleCommand::from_command(command),
        steering,
    }
}
