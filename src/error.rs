use thiserror::Error;

pub const INVALID_ARG: &str = "invalid argument passed";
pub const NOT_A_LETTER: &str = "argument must be a single character";
pub const NOT_POSITIVE: &str = "argument must be a positive integer";
pub const LEN_GREATER_THAN_POOL: &str = "length greater than pool length";
pub const TOO_MANY_REMOVALS: &str = "more elements to remove than exist";
pub const NONEXISTENT_REMOVAL: &str = "tried to remove nonexistent element";

/// Failure of a criteria or dictionary operation. Either kind is reported
/// before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// Input shape or content violates a precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A removal targets something the criteria does not hold
    #[error("criteria violation: {0}")]
    CriteriaViolation(String),
}

impl WordError {
    pub fn invalid(msg: &str) -> Self {
        Self::InvalidArgument(msg.to_string())
    }

    pub fn violation(msg: &str) -> Self {
        Self::CriteriaViolation(msg.to_string())
    }
}

/// Errors raised while reading or writing corpora and configuration
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("fst error: {0}")]
    Fst(#[from] fst::Error),

    #[error("unsupported snapshot version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
