//! Error types for the solver library

use thiserror::Error;

/// Error type for contract violations detected before or while solving
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DpError {
    /// Weights and profits were given with different lengths
    #[error("Length mismatch: {weights} weights but {profits} profits")]
    LengthMismatch { weights: usize, profits: usize },
    /// The number of items to consider exceeds the number of items supplied
    #[error("Item count {count} is out of range for {len} item(s)")]
    ItemCountOutOfRange { count: usize, len: usize },
    /// The profits of the items considered do not fit in a `u64` when summed
    #[error("Total profit of the first {count} item(s) overflows u64")]
    ProfitOverflow { count: usize },
    /// The caller-supplied memo table cannot hold every state of the problem
    #[error("Memo table is {rows}x{cols} but the problem needs {needed_rows}x{needed_cols}")]
    MemoTooSmall {
        rows: usize,
        cols: usize,
        needed_rows: usize,
        needed_cols: usize,
    },
    /// A fixed-size backend was asked for a cell outside its grid
    #[error("Index ({row}, {col}) is out of bounds for a {rows}x{cols} table")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Strategies that must agree returned different answers
    #[error("Strategies disagree: {0}")]
    Disagreement(String),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a second strategy under an existing label
    #[error("Duplicate strategy registration for label {0:?}")]
    Duplicate(&'static str),
}
