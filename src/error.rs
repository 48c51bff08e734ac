//! Error types for instrumented sorting runs.
//!
//! [`SortError::Cancelled`] is the only early-termination path of a run. It is
//! raised by a step sink and travels unmodified through every algorithm frame
//! back to the run controller, which treats it as an expected outcome.

use thiserror::Error;

/// Errors produced while configuring or driving a sorting run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortError {
    /// The run was cancelled at a step boundary.
    #[error("run cancelled")]
    Cancelled,
    /// The algorithm identifier is not one of the known algorithms.
    #[error("unknown sorting algorithm '{name}' (expected one of: selection, heap, quick, merge)")]
    UnknownAlgorithm {
        /// Identifier as supplied by the caller.
        name: String,
    },
    /// An algorithm emitted a step that highlights an index outside the sequence.
    #[error("step index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Length of the sequence being sorted.
        len: usize,
    },
    /// Run configuration cannot produce a valid input sequence.
    #[error("invalid run configuration: {reason}")]
    InvalidConfig {
        /// Human readable description of the problem.
        reason: String,
    },
}

impl SortError {
    /// Returns `true` for the expected, user-triggered abort.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SortError::Cancelled)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SortError>;
