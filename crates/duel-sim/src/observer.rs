//! Race observer trait for progress reporting and data collection.

use duel_core::{CheckpointId, Tick, VehicleId};
use duel_vehicle::Vehicle;

use crate::{RaceOutcome, RacerStatus, TickDecision};

/// Callbacks invoked by [`Race::run`][crate::Race::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: lap printer
///
/// ```rust,ignore
/// struct LapPrinter;
///
/// impl RaceObserver for LapPrinter {
///     fn on_lap(&mut self, tick: Tick, vehicle: VehicleId, lap: u32) {
///         println!("{tick}: vehicle {vehicle} finished lap {lap}");
///     }
/// }
/// ```
pub trait RaceObserver {
    /// Called at the very start of each tick, before any decision.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per racer per tick, just before the decision is applied.
    ///
    /// `vehicle` is the pre-tick state the decision was taken on.
    fn on_decision(&mut self, _tick: Tick, _vehicle: &Vehicle, _decision: &TickDecision) {}

    /// Called when a racer crosses its next expected checkpoint.
    fn on_checkpoint(&mut self, _tick: Tick, _vehicle: VehicleId, _checkpoint: CheckpointId) {}

    /// Called when a racer completes a lap.  `lap` counts from 1.
    fn on_lap(&mut self, _tick: Tick, _vehicle: VehicleId, _lap: u32) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with the post-tick state of every racer, in id order.
    fn on_snapshot(&mut self, _tick: Tick, _racers: &[RacerStatus]) {}

    /// Called once when the race stops.
    fn on_race_end(&mut self, _outcome: &RaceOutcome) {}
}

/// A [`RaceObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl RaceObserver for NoopObserver {}
