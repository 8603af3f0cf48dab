//! Error types for the decision criteria domain.

use thiserror::Error;

/// Errors describing a malformed payoff matrix or a probability vector
/// that does not line up with one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Payoff matrix has no rows")]
    EmptyMatrix,

    #[error("Row {row} of the payoff matrix is empty")]
    EmptyRow { row: usize },

    #[error("Row {row} has {actual} columns, expected {expected}")]
    JaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Probability vector has {probabilities} entries for {states} states of nature")]
    ProbabilityCountMismatch {
        states: usize,
        probabilities: usize,
    },
}

/// Errors for values outside their documented domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("Alpha must be between 0 and 1, got {value}")]
    AlphaOutOfRange { value: f64 },

    #[error("Probability at index {index} must be between 0 and 1, got {value}")]
    ProbabilityOutOfRange { index: usize, value: f64 },

    #[error("Probabilities must sum to 1, got {sum}")]
    ProbabilityMassMismatch { sum: f64 },
}
