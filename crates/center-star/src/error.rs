//! Errors raised while building a center-star alignment.

use thiserror::Error;

/// Errors that can occur while building a multiple sequence alignment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MsaError {
    /// At least two sequences are needed to build an alignment.
    #[error("Need at least two sequences to align, got {0}")]
    TooFewSequences(usize),
    /// A cell in the DP table points to a cell that is not one of its three
    /// neighbors.
    #[error("Corrupted DP table: illegal predecessor at cell ({row}, {col})")]
    CorruptTable {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
    },
    /// Two aligned copies of the center disagree on a residue.
    #[error("Copies of the center disagree at column {column}: expected '{expected}', found '{found}'")]
    CenterMismatch {
        /// Column at which the copies disagree.
        column: usize,
        /// Residue found in the first copy.
        expected: char,
        /// Residue found in the disagreeing copy.
        found: char,
    },
    /// A row could not be padded to the width of the alignment.
    #[error("Row '{name}' has length {found} but the alignment has width {expected}")]
    RaggedAlignment {
        /// Name of the offending row.
        name: String,
        /// Width of the alignment.
        expected: usize,
        /// Length of the row.
        found: usize,
    },
}
