//! `duel-output`: race telemetry writers.
//!
//! | Backend | Files created                   |
//! |---------|---------------------------------|
//! | CSV     | `telemetry.csv`, `laps.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`TelemetryObserver`], which implements `duel_sim::RaceObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use duel_output::{CsvWriter, TelemetryObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TelemetryObserver::new(writer, &config);
//! race.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TelemetryObserver;
pub use row::{LapRow, TelemetryRow};
pub use writer::OutputWriter;
