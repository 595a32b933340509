use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent config: `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("agent config: lookahead depth must be at least 1")]
    ZeroLookahead,
}

pub type AgentResult<T> = Result<T, AgentError>;
