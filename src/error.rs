//! Error type shared by every module.

use thiserror::Error;

/// Error returned when a function's documented precondition is violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathStatsError {
    /// Invalid input (empty sample, out-of-range argument, result that
    /// would fall below absolute zero or overflow the return type).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MathStatsError>;

/// Builds an [`MathStatsError::InvalidInput`] and records the rejection.
pub(crate) fn invalid_input(op: &'static str, reason: impl Into<String>) -> MathStatsError {
    let reason = reason.into();
    tracing::debug!(op, reason = %reason, "rejected input");
    MathStatsError::InvalidInput(format!("{op}: {reason}"))
}
