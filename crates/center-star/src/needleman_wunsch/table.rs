//! The index-addressed DP table of a pairwise alignment.

use core::ops::Index;

use super::Direction;

/// One cell of the DP table: the best score of aligning two prefixes and the
/// cell it was reached from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DpCell {
    /// The best score of aligning the prefixes ending at this cell.
    pub score: i64,
    /// Row of the predecessor cell.
    pub pred_row: usize,
    /// Column of the predecessor cell.
    pub pred_col: usize,
}

impl DpCell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(score: i64, (pred_row, pred_col): (usize, usize)) -> Self {
        Self {
            score,
            pred_row,
            pred_col,
        }
    }

    /// The coordinates of the predecessor cell.
    #[must_use]
    pub const fn pred(&self) -> (usize, usize) {
        (self.pred_row, self.pred_col)
    }
}

/// A `(n + 1) x (m + 1)` grid of `DpCell`s, stored row-major in one arena.
///
/// Rows follow the first sequence and columns follow the second.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpTable {
    /// The cells, row-major.
    cells: Vec<DpCell>,
    /// The number of rows, `n + 1`.
    rows: usize,
    /// The number of columns, `m + 1`.
    cols: usize,
}

impl DpTable {
    /// Create a table for sequences of lengths `n` and `m` with every cell
    /// pointing at the origin.
    pub(crate) fn new(n: usize, m: usize) -> Self {
        let (rows, cols) = (n + 1, m + 1);
        Self {
            cells: vec![DpCell::new(0, (0, 0)); rows * cols],
            rows,
            cols,
        }
    }

    /// The number of rows, one more than the length of the first sequence.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns, one more than the length of the second sequence.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `(row, col)`, or `None` if it lies outside the table.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&DpCell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Sets the cell at `(row, col)`.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: DpCell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// The score in the bottom-right cell, i.e. the score of the optimal
    /// global alignment.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.cells.last().map_or(0, |c| c.score)
    }

    /// The direction of the step from `(row, col)` to its predecessor.
    ///
    /// Returns `None` at the origin or when the predecessor is not a
    /// neighbor.
    #[must_use]
    pub fn direction(&self, row: usize, col: usize) -> Option<Direction> {
        self.get(row, col).and_then(|c| Direction::between((row, col), c.pred()))
    }
}

impl Index<(usize, usize)> for DpTable {
    type Output = DpCell;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row * self.cols + col]
    }
}
