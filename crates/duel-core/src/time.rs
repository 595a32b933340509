//! Simulation time model and race configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! decision step for every vehicle: speed controller, steering search,
//! kinematic advance.  `RaceClock` maps ticks to simulated seconds using a
//! fixed tick rate (60 Hz by default, one tick per rendered frame).

use std::fmt;

use crate::{DuelError, DuelResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RaceClock ─────────────────────────────────────────────────────────────────

/// Converts tick counts to simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceClock {
    /// Ticks per simulated second.
    pub tick_rate_hz: u32,
    /// The current tick, advanced by `RaceClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl RaceClock {
    pub fn new(tick_rate_hz: u32) -> Self {
        Self { tick_rate_hz, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 / self.tick_rate_hz.max(1) as f64
    }
}

impl fmt::Display for RaceClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── RaceConfig ────────────────────────────────────────────────────────────────

/// Top-level race configuration.
///
/// Loaded from JSON by the demo binary (with the `serde` feature) and passed
/// to `RaceBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RaceConfig {
    /// Hard stop: the race ends here even if nobody finished.
    pub max_ticks: u64,

    /// Completed laps needed to win.
    pub laps_to_win: u32,

    /// Master RNG seed for track generation.  Same seed, same track.
    pub seed: u64,

    /// Ticks per simulated second (display only).
    pub tick_rate_hz: u32,

    /// Snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Rayon worker count for the parallel decision phase.  `None` uses all
    /// logical cores.  Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            max_ticks:             20_000,
            laps_to_win:           1,
            seed:                  42,
            tick_rate_hz:          60,
            output_interval_ticks: 1,
            num_threads:           None,
        }
    }
}

impl RaceConfig {
    /// The tick at which the race is cut off (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }

    /// Construct a `RaceClock` for this run.
    pub fn make_clock(&self) -> RaceClock {
        RaceClock::new(self.tick_rate_hz)
    }

    /// Reject configurations that could never produce a result.
    pub fn validate(&self) -> DuelResult<()> {
        if self.max_ticks == 0 {
            return Err(DuelError::Config("max_ticks must be positive".into()));
        }
        if self.laps_to_win == 0 {
            return Err(DuelError::Config("laps_to_win must be positive".into()));
        }
        if self.tick_rate_hz == 0 {
            return Err(DuelError::Config("tick_rate_hz must be positive".into()));
        }
        Ok(())
    }
}
