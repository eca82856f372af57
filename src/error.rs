//! Error taxonomy.

/// Everything that can go wrong while preparing or running a solve.
///
/// All failures are structural. Nothing here is transient, so nothing
/// is ever retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input rejected before solving begins.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Internal bookkeeping reached a state valid input cannot produce.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    /// Sampler called with counts that do not add up to its denominator.
    #[error("invalid state: {0}")]
    PreconditionViolation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
    pub(crate) fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionViolation(msg.into())
    }
}
