//! Integration tests for duel-output.

#[cfg(test)]
mod csv_tests {
    use duel_vehicle::{SteeringAction, ThrottleCommand};
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, LAPS_FILE, TELEMETRY_FILE};
    use crate::row::{LapRow, TelemetryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn telemetry_row(vehicle_id: u32, tick: u64) -> TelemetryRow {
        TelemetryRow {
            tick,
            vehicle_id,
            x:              800.0,
            y:              400.5,
            heading:        1.5708,
            speed:          0.3,
            progress_index: 12,
            curvature:      0.01,
            dist_to_center: 0.5,
            command:        0.6667,
            throttle:       ThrottleCommand::Accelerate,
            steering:       SteeringAction::Left,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(TELEMETRY_FILE).exists());
        assert!(dir.path().join(LAPS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TELEMETRY_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, [
            "tick", "vehicle_id", "x", "y", "heading", "speed", "progress_index",
            "curvature", "dist_to_center", "command", "throttle", "steering",
        ]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join(LAPS_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["vehicle_id", "lap", "tick", "lap_ticks"]);
    }

    #[test]
    fn csv_telemetry_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_telemetry(&[telemetry_row(0, 5), telemetry_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TELEMETRY_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5");          // tick
        assert_eq!(&rows[1][1], "1");          // vehicle_id
        assert_eq!(&rows[0][3], "400.500");    // y
        assert_eq!(&rows[0][6], "12");         // progress_index
        assert_eq!(&rows[0][10], "accelerate");
        assert_eq!(&rows[0][11], "left");
    }

    #[test]
    fn csv_lap_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_lap(&LapRow { vehicle_id: 1, lap: 2, tick: 900, lap_ticks: 450 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(LAPS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "2");
        assert_eq!(&rows[0][2], "900");
        assert_eq!(&rows[0][3], "450");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_telemetry(&[]).unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        let result = CsvWriter::new(&dir.path().join("does/not/exist"));
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use std::f64::consts::{FRAC_PI_2, TAU};

    use duel_agent::{AgentConfig, HeuristicAgent};
    use duel_core::{Point2, RaceConfig, Tick, VehicleId};
    use duel_fuzzy::SpeedController;
    use duel_sim::{RaceBuilder, RaceObserver};
    use duel_track::Track;
    use duel_vehicle::{Vehicle, VehicleParams};
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, LAPS_FILE, TELEMETRY_FILE};
    use crate::observer::TelemetryObserver;
    use crate::row::{LapRow, TelemetryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config(max_ticks: u64, interval: u64) -> RaceConfig {
        RaceConfig {
            max_ticks,
            laps_to_win:           1,
            seed:                  1,
            tick_rate_hz:          60,
            output_interval_ticks: interval,
            num_threads:           Some(1),
        }
    }

    fn circle_track() -> Track {
        let pts = (0..200)
            .map(|i| {
                let a = TAU * i as f64 / 200.0;
                Point2::new(500.0 + 300.0 * a.cos(), 400.0 + 300.0 * a.sin())
            })
            .collect();
        Track::new(pts, 60.0).unwrap()
    }

    fn car() -> Vehicle {
        Vehicle::new(Point2::new(800.0, 400.0), FRAC_PI_2, VehicleParams::default()).unwrap()
    }

    #[test]
    fn integration_csv() {
        let cfg = config(6, 2);
        let mut race = RaceBuilder::new(cfg.clone(), circle_track(), SpeedController::new().unwrap())
            .racer("a", car(), HeuristicAgent::new(AgentConfig::cautious()).unwrap())
            .racer("b", car(), HeuristicAgent::new(AgentConfig::aggressive()).unwrap())
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = TelemetryObserver::new(writer, &cfg);
        race.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → ticks 0, 2, 4 × 2 racers = 6 rows.
        assert_eq!(obs.rows_written(), 6);
        let mut rdr = csv::Reader::from_path(dir.path().join(TELEMETRY_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "0");
        assert_eq!(&rows[1][1], "1");
        assert_eq!(&rows[0][5], "0.000"); // standing start
        assert_eq!(&rows[0][10], "accelerate");

        let mut laps = csv::Reader::from_path(dir.path().join(LAPS_FILE)).unwrap();
        assert_eq!(laps.records().count(), 0);
    }

    /// In-memory writer that records everything and can be told to fail.
    #[derive(Default)]
    struct MemoryWriter {
        telemetry:  Vec<TelemetryRow>,
        laps:       Vec<LapRow>,
        finished:   usize,
        fail_laps:  bool,
    }

    impl OutputWriter for MemoryWriter {
        fn write_telemetry(&mut self, rows: &[TelemetryRow]) -> OutputResult<()> {
            self.telemetry.extend_from_slice(rows);
            Ok(())
        }
        fn write_lap(&mut self, row: &LapRow) -> OutputResult<()> {
            if self.fail_laps {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.laps.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn lap_ticks_are_per_vehicle_deltas() {
        let mut obs = TelemetryObserver::new(MemoryWriter::default(), &config(10, 1));
        obs.on_lap(Tick(400), VehicleId(1), 1);
        obs.on_lap(Tick(420), VehicleId(0), 1);
        obs.on_lap(Tick(790), VehicleId(1), 2);
        let w = obs.into_writer();
        assert_eq!(w.laps[0], LapRow { vehicle_id: 1, lap: 1, tick: 400, lap_ticks: 400 });
        assert_eq!(w.laps[1].lap_ticks, 420);
        assert_eq!(w.laps[2], LapRow { vehicle_id: 1, lap: 2, tick: 790, lap_ticks: 390 });
    }

    #[test]
    fn first_error_is_kept() {
        let writer = MemoryWriter { fail_laps: true, ..MemoryWriter::default() };
        let mut obs = TelemetryObserver::new(writer, &config(10, 1));
        obs.on_lap(Tick(1), VehicleId(0), 1);
        obs.on_lap(Tick(2), VehicleId(0), 2);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn zero_interval_records_no_telemetry() {
        let cfg = config(5, 0);
        let mut race = RaceBuilder::new(cfg.clone(), circle_track(), SpeedController::new().unwrap())
            .racer("a", car(), HeuristicAgent::new(AgentConfig::default()).unwrap())
            .build()
            .unwrap();
        let mut obs = TelemetryObserver::new(MemoryWriter::default(), &cfg);
        race.run(&mut obs).unwrap();
        let w = obs.into_writer();
        assert!(w.telemetry.is_empty());
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn telemetry_matches_pre_tick_state() {
        let cfg = config(3, 1);
        let mut race = RaceBuilder::new(cfg.clone(), circle_track(), SpeedController::new().unwrap())
            .racer("a", car(), HeuristicAgent::new(AgentConfig::default()).unwrap())
            .build()
            .unwrap();
        let mut obs = TelemetryObserver::new(MemoryWriter::default(), &cfg);
        race.run(&mut obs).unwrap();
        let w = obs.into_writer();
        assert_eq!(w.telemetry.len(), 3);
        assert_eq!(w.telemetry[0].speed, 0.0);
        assert!((w.telemetry[1].speed - 0.3).abs() < 1e-12);
        assert_eq!(w.telemetry.iter().map(|r| r.tick).collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
