//! `TelemetryObserver<W>`: bridges `RaceObserver` to an `OutputWriter`.

use duel_core::{RaceConfig, Tick, VehicleId};
use duel_sim::{RaceObserver, RaceOutcome, TickDecision};
use duel_vehicle::Vehicle;
use tracing::debug;

use crate::row::{LapRow, TelemetryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RaceObserver`] that writes per-tick telemetry and lap rows to any
/// [`OutputWriter`] backend.
///
/// Telemetry is recorded on ticks that are multiples of
/// `config.output_interval_ticks` (0 disables it); laps are always recorded.
/// Rows for one tick are buffered and written as a batch when the next tick
/// starts.
///
/// Errors from the writer are stored internally because `RaceObserver`
/// methods have no return value.  After `race.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct TelemetryObserver<W: OutputWriter> {
    writer:         W,
    interval:       u64,
    pending:        Vec<TelemetryRow>,
    /// Tick of each racer's previous lap, indexed by `VehicleId`.
    last_lap_tick:  Vec<u64>,
    rows_written:   u64,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> TelemetryObserver<W> {
    /// Create an observer backed by `writer`, sampling telemetry at
    /// `config.output_interval_ticks`.
    pub fn new(writer: W, config: &RaceConfig) -> Self {
        Self {
            writer,
            interval:      config.output_interval_ticks,
            pending:       Vec::new(),
            last_lap_tick: Vec::new(),
            rows_written:  0,
            last_error:    None,
        }
    }

    /// Take the stored write error (if any) after `race.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Telemetry rows handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the race).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_telemetry(&self.pending);
        self.rows_written += self.pending.len() as u64;
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RaceObserver for TelemetryObserver<W> {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.flush_pending();
    }

    fn on_decision(&mut self, tick: Tick, vehicle: &Vehicle, decision: &TickDecision) {
        if self.interval > 0 && tick.0 % self.interval == 0 {
            self.pending.push(TelemetryRow::new(tick.0, vehicle, decision));
        }
    }

    fn on_lap(&mut self, tick: Tick, vehicle: VehicleId, lap: u32) {
        let slot = vehicle.index();
        if self.last_lap_tick.len() <= slot {
            self.last_lap_tick.resize(slot + 1, 0);
        }
        let row = LapRow {
            vehicle_id: vehicle.0,
            lap,
            tick:       tick.0,
            lap_ticks:  tick.since(Tick(self.last_lap_tick[slot])),
        };
        self.last_lap_tick[slot] = tick.0;
        let result = self.writer.write_lap(&row);
        self.store_err(result);
    }

    fn on_race_end(&mut self, outcome: &RaceOutcome) {
        self.flush_pending();
        let result = self.writer.finish();
        self.store_err(result);
        debug!(rows = self.rows_written, final_tick = %outcome.final_tick, "telemetry closed");
    }
}
