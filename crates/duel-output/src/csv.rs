//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `telemetry.csv`
//! - `laps.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{LapRow, OutputResult, TelemetryRow};
use crate::writer::OutputWriter;

pub const TELEMETRY_FILE: &str = "telemetry.csv";
pub const LAPS_FILE: &str = "laps.csv";

/// Writes race output to two CSV files.
pub struct CsvWriter {
    telemetry: Writer<File>,
    laps:      Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut telemetry = Writer::from_path(dir.join(TELEMETRY_FILE))?;
        telemetry.write_record([
            "tick", "vehicle_id", "x", "y", "heading", "speed", "progress_index",
            "curvature", "dist_to_center", "command", "throttle", "steering",
        ])?;

        let mut laps = Writer::from_path(dir.join(LAPS_FILE))?;
        laps.write_record(["vehicle_id", "lap", "tick", "lap_ticks"])?;

        Ok(Self { telemetry, laps, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_telemetry(&mut self, rows: &[TelemetryRow]) -> OutputResult<()> {
        for row in rows {
            self.telemetry.write_record(&[
                row.tick.to_string(),
                row.vehicle_id.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                format!("{:.4}", row.heading),
                format!("{:.3}", row.speed),
                row.progress_index.to_string(),
                format!("{:.4}", row.curvature),
                format!("{:.3}", row.dist_to_center),
                format!("{:.4}", row.command),
                row.throttle.as_str().to_owned(),
                row.steering.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_lap(&mut self, row: &LapRow) -> OutputResult<()> {
        self.laps.write_record(&[
            row.vehicle_id.to_string(),
            row.lap.to_string(),
            row.tick.to_string(),
            row.lap_ticks.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.telemetry.flush()?;
        self.laps.flush()?;
        Ok(())
    }
}
