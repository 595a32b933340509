//! The `OutputWriter` trait implemented by backend writers.

use crate::{LapRow, OutputResult, TelemetryRow};

/// Trait implemented by telemetry backends.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`TelemetryObserver::take_error`][crate::TelemetryObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of telemetry rows.
    fn write_telemetry(&mut self, rows: &[TelemetryRow]) -> OutputResult<()>;

    /// Write one lap row.
    fn write_lap(&mut self, row: &LapRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
