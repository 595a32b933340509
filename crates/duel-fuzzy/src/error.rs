use thiserror::Error;

/// Build-time errors.  Evaluating a built system cannot fail.
#[derive(Debug, Error)]
pub enum FuzzyError {
    #[error("invalid universe: {0}")]
    InvalidUniverse(String),

    #[error("invalid membership function: {0}")]
    InvalidMembership(String),

    #[error("variable `{variable}` already has a term named `{term}`")]
    DuplicateTerm { variable: String, term: String },

    #[error("unknown input variable `{0}`")]
    UnknownVariable(String),

    #[error("variable `{variable}` has no term `{term}`")]
    UnknownTerm { variable: String, term: String },

    #[error("system declares {expected} inputs but {got} were added")]
    InputCountMismatch { expected: usize, got: usize },

    #[error("fuzzy system has no output variable")]
    MissingOutput,

    #[error("fuzzy system has no rules")]
    NoRules,
}

pub type FuzzyResult<T> = Result<T, FuzzyError>;
