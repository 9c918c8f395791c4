//! Error types for engine misuse.
//!
//! Stepping never fails; only calls that do not fit the engine's current
//! mode or run state are rejected.

use thiserror::Error;

/// Errors reported synchronously by [`SimulationEngine`](super::SimulationEngine).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A competitive-only operation was called in classic mode.
    #[error("{operation} is only available in competitive mode")]
    ModeError {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// The call is not allowed in the engine's current state.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

impl EngineError {
    pub(crate) fn competitive_only(operation: &'static str) -> Self {
        Self::ModeError { operation }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidOperation(reason.into())
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            EngineError::competitive_only("scores").to_string(),
            "scores is only available in competitive mode"
        );
        assert_eq!(
            EngineError::invalid("board is locked while running").to_string(),
            "invalid operation: board is locked while running"
        );
    }
}
