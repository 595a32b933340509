use thiserror::Error;

#[derive(Debug, Error)]
pub enum VehicleError {
    #[error("vehicle parameter `{name}` must be finite and non-negative, got {value}")]
    InvalidParam { name: &'static str, value: f64 },

    #[error("vehicle position must be finite")]
    NonFinitePosition,
}

pub type VehicleResult<T> = Result<T, VehicleError>;
