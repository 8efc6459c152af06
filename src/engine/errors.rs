//! Error types for the search engines
//!
//! [`EngineError`] covers everything a caller can get wrong: input that does
//! not fit the selected algorithm, and control operations issued from a
//! status that does not allow them. [`HistoryError`] covers step-history
//! bookkeeping and replay navigation.
//!
//! Nothing here is fatal. A rejected `start` leaves the engine idle and a
//! rejected control operation leaves it exactly as it was.

use crate::algorithms::AlgorithmKind;
use crate::engine::Status;
use crate::model::Family;
use thiserror::Error;

/// Errors raised synchronously by [`Engine`](crate::engine::Engine)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Array search over zero elements
    #[error("{algorithm} needs at least one element")]
    EmptyArray { algorithm: AlgorithmKind },

    /// Array input for a string search, or text input for an array search
    #[error("{algorithm} expects {expected} input")]
    WrongInputKind {
        algorithm: AlgorithmKind,
        expected: Family,
    },

    /// Control operation not valid from the current status
    #[error("cannot {operation} while {status}")]
    InvalidOperation {
        operation: &'static str,
        status: Status,
    },
}

impl EngineError {
    /// Whether the caller supplied input the algorithm cannot run on
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EngineError::EmptyArray { .. } | EngineError::WrongInputKind { .. }
        )
    }

    /// Short explanation suitable for a status line
    pub fn reason(&self) -> String {
        match self {
            EngineError::EmptyArray { .. } => "Array is empty".to_string(),
            EngineError::WrongInputKind { expected, .. } => {
                format!("Expected {} input", expected)
            }
            EngineError::InvalidOperation { operation, status } => {
                format!("Cannot {} ({})", operation, status)
            }
        }
    }
}

/// Step history errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Recording the step would exceed the configured byte budget
    #[error("step history limit exceeded: {current} + {requested} > {limit} bytes")]
    LimitExceeded {
        current: usize,
        requested: usize,
        limit: usize,
    },

    #[error("already at the first step")]
    AtStart,

    #[error("already at the last step")]
    AtEnd,

    #[error("no steps recorded")]
    Empty,
}
