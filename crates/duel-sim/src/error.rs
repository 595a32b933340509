use duel_agent::AgentError;
use duel_core::DuelError;
use duel_fuzzy::FuzzyError;
use duel_track::TrackError;
use duel_vehicle::VehicleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RaceError {
    #[error("a race needs at least one racer")]
    NoRacers,

    #[error(transparent)]
    Core(#[from] DuelError),

    #[error("track error: {0}")]
    Track(#[from] TrackError),

    #[error("vehicle error: {0}")]
    Vehicle(#[from] VehicleError),

    #[error("speed controller error: {0}")]
    Fuzzy(#[from] FuzzyError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
}

pub type RaceResult<T> = Result<T, RaceError>;
