//! Demo configuration, optionally loaded from a JSON file.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use duel_agent::AgentConfig;
use duel_core::RaceConfig;
use duel_track::TrackGenConfig;
use duel_vehicle::VehicleParams;

/// Everything the demo needs.  Missing JSON fields fall back to the
/// defaults below.
///
/// ```json
/// { "race": { "laps_to_win": 2, "seed": 7 }, "aggressive": { "progress_weight": 1.5 } }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub race:       RaceConfig,
    pub track:      TrackGenConfig,
    pub vehicle:    VehicleParams,
    pub cautious:   AgentConfig,
    pub aggressive: AgentConfig,
    pub output_dir: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            race:       RaceConfig::default(),
            track:      TrackGenConfig::default(),
            vehicle:    VehicleParams::default(),
            cautious:   AgentConfig::cautious(),
            aggressive: AgentConfig::aggressive(),
            output_dir: PathBuf::from("output/duel"),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))
    }
}
