//! Alignment operations for the Needleman-Wunsch algorithm.

/// The direction of a step through the DP table, read from a cell to its
/// predecessor.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Direction {
    /// Up, for a residue of the first sequence against a gap.
    Vertical,
    /// Left, for a gap against a residue of the second sequence.
    Horizontal,
    /// Diagonal (Up and Left) for a match or substitution.
    Diagonal,
}

impl Direction {
    /// The predecessor of `(row, col)` when stepping in this direction.
    ///
    /// Returns `None` if the step would leave the table.
    #[must_use]
    pub const fn step_from(self, row: usize, col: usize) -> Option<(usize, usize)> {
        match self {
            Self::Vertical if row > 0 => Some((row - 1, col)),
            Self::Horizontal if col > 0 => Some((row, col - 1)),
            Self::Diagonal if row > 0 && col > 0 => Some((row - 1, col - 1)),
            _ => None,
        }
    }

    /// The direction that leads from `(row, col)` to `pred`, if `pred` is one
    /// of its three neighbors.
    #[must_use]
    pub const fn between((row, col): (usize, usize), pred: (usize, usize)) -> Option<Self> {
        if row == 0 && col == 0 {
            return None;
        }
        if row > 0 && pred.0 == row - 1 && pred.1 == col {
            Some(Self::Vertical)
        } else if col > 0 && pred.0 == row && pred.1 == col - 1 {
            Some(Self::Horizontal)
        } else if row > 0 && col > 0 && pred.0 == row - 1 && pred.1 == col - 1 {
            Some(Self::Diagonal)
        } else {
            None
        }
    }
}
