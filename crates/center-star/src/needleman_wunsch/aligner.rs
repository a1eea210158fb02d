//! The Needleman-Wunsch aligner.

use crate::{MsaError, ScoringScheme, GAP};

use super::{DpCell, DpTable, Direction};

/// A Needleman-Wunsch aligner with a linear gap penalty.
///
/// This works with any sequence of bytes. The aligner maximizes the score
/// under its `ScoringScheme`.
#[derive(Clone, Copy, Debug)]
pub struct Aligner {
    /// The scores for matches, mismatches and gaps.
    scoring: ScoringScheme,
    /// The gap character.
    gap: u8,
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new(ScoringScheme::default())
    }
}

impl Aligner {
    /// Create a new aligner that uses `-` as the gap character.
    #[must_use]
    pub const fn new(scoring: ScoringScheme) -> Self {
        Self { scoring, gap: GAP }
    }

    /// Get the gap character.
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.gap
    }

    /// Get the scoring scheme.
    #[must_use]
    pub const fn scoring(&self) -> ScoringScheme {
        self.scoring
    }

    /// Compute the dynamic programming table for the Needleman-Wunsch
    /// algorithm.
    ///
    /// The value at `(i, j)` is the best score of aligning the first `i`
    /// residues of `x` with the first `j` residues of `y`. On ties the
    /// vertical step wins over the horizontal step, which wins over the
    /// diagonal step.
    ///
    /// # Arguments
    ///
    /// * `x` - The first sequence, along the rows.
    /// * `y` - The second sequence, along the columns.
    pub fn dp_table<S: AsRef<[u8]> + ?Sized, T: AsRef<[u8]> + ?Sized>(&self, x: &S, y: &T) -> DpTable {
        let (x, y) = (x.as_ref(), y.as_ref());
        let gap = i64::from(self.scoring.gap_penalty);

        let mut table = DpTable::new(x.len(), y.len());

        // The first row walks horizontally away from the origin.
        for j in 1..table.cols() {
            let score = table[(0, j - 1)].score + gap;
            table.set(0, j, DpCell::new(score, (0, j - 1)));
        }

        // The first column walks vertically away from the origin.
        for i in 1..table.rows() {
            let score = table[(i - 1, 0)].score + gap;
            table.set(i, 0, DpCell::new(score, (i - 1, 0)));
        }

        // On iteration (i, j), we fill in the cell at (i + 1, j + 1).
        for (i, &xc) in x.iter().enumerate() {
            for (j, &yc) in y.iter().enumerate() {
                let vertical = table[(i, j + 1)].score + gap;
                let horizontal = table[(i + 1, j)].score + gap;
                let diagonal = table[(i, j)].score + i64::from(self.scoring.sub_score(xc, yc));

                let cell = if vertical >= horizontal && vertical >= diagonal {
                    DpCell::new(vertical, (i, j + 1))
                } else if horizontal >= diagonal {
                    DpCell::new(horizontal, (i + 1, j))
                } else {
                    DpCell::new(diagonal, (i, j))
                };
                table.set(i + 1, j + 1, cell);
            }
        }

        table
    }

    /// The score of the optimal global alignment of two sequences.
    pub fn score<S: AsRef<[u8]> + ?Sized, T: AsRef<[u8]> + ?Sized>(&self, x: &S, y: &T) -> i64 {
        self.dp_table(x, y).score()
    }

    /// Trace back through a DP table to recover the aligned rows.
    ///
    /// # Arguments
    ///
    /// * `x` - The first sequence, along the rows of `table`.
    /// * `y` - The second sequence, along the columns of `table`.
    /// * `table` - The DP table built from `x` and `y`.
    ///
    /// # Errors
    ///
    /// * If the table does not match the sequences' lengths.
    /// * If any cell on the path points to a cell that is not a neighbor.
    pub fn align<S: AsRef<[u8]> + ?Sized, T: AsRef<[u8]> + ?Sized>(
        &self,
        x: &S,
        y: &T,
        table: &DpTable,
    ) -> Result<[Vec<u8>; 2], MsaError> {
        let (x, y) = (x.as_ref(), y.as_ref());
        let [mut row_i, mut col_i] = [x.len(), y.len()];
        if table.rows() != row_i + 1 || table.cols() != col_i + 1 {
            return Err(MsaError::CorruptTable { row: row_i, col: col_i });
        }

        let [mut x_aligned, mut y_aligned] = [
            Vec::with_capacity(x.len() + y.len()),
            Vec::with_capacity(x.len() + y.len()),
        ];

        while row_i > 0 || col_i > 0 {
            let direction = table
                .direction(row_i, col_i)
                .ok_or(MsaError::CorruptTable { row: row_i, col: col_i })?;
            match direction {
                Direction::Vertical => {
                    x_aligned.push(x[row_i - 1]);
                    y_aligned.push(self.gap);
                    row_i -= 1;
                }
                Direction::Horizontal => {
                    x_aligned.push(self.gap);
                    y_aligned.push(y[col_i - 1]);
                    col_i -= 1;
                }
                Direction::Diagonal => {
                    x_aligned.push(x[row_i - 1]);
                    y_aligned.push(y[col_i - 1]);
                    row_i -= 1;
                    col_i -= 1;
                }
            }
        }

        x_aligned.reverse();
        y_aligned.reverse();

        Ok([x_aligned, y_aligned])
    }

    /// Align two strings using the Needleman-Wunsch algorithm.
    ///
    /// # Errors
    ///
    /// See [`Aligner::align`].
    pub fn align_str<S: AsRef<str> + ?Sized>(&self, x: &S, y: &S, table: &DpTable) -> Result<[String; 2], MsaError> {
        let [x_aligned, y_aligned] = self.align(x.as_ref(), y.as_ref(), table)?;
        Ok([
            String::from_utf8_lossy(&x_aligned).into_owned(),
            String::from_utf8_lossy(&y_aligned).into_owned(),
        ])
    }

    /// Build the DP table for two named sequences and trace it back.
    ///
    /// # Errors
    ///
    /// See [`Aligner::align`].
    pub fn align_pair<S: AsRef<[u8]> + ?Sized, T: AsRef<[u8]> + ?Sized>(
        &self,
        (x_name, x): (&str, &S),
        (y_name, y): (&str, &T),
    ) -> Result<PairwiseAlignment, MsaError> {
        let table = self.dp_table(x, y);
        PairwiseAlignment::from_table(self, (x_name, x), (y_name, y), &table)
    }
}

/// Two named, aligned rows of equal length and the score of their alignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairwiseAlignment {
    /// The names of the two sequences.
    names: [String; 2],
    /// The aligned rows.
    rows: [Vec<u8>; 2],
    /// The optimal score.
    score: i64,
}

impl PairwiseAlignment {
    /// Trace back `table` and collect the result.
    ///
    /// # Errors
    ///
    /// See [`Aligner::align`].
    pub fn from_table<S: AsRef<[u8]> + ?Sized, T: AsRef<[u8]> + ?Sized>(
        aligner: &Aligner,
        (x_name, x): (&str, &S),
        (y_name, y): (&str, &T),
        table: &DpTable,
    ) -> Result<Self, MsaError> {
        let rows = aligner.align(x, y, table)?;
        Ok(Self {
            names: [x_name.to_string(), y_name.to_string()],
            rows,
            score: table.score(),
        })
    }

    /// The names of the two sequences.
    #[must_use]
    pub const fn names(&self) -> &[String; 2] {
        &self.names
    }

    /// The aligned rows.
    #[must_use]
    pub const fn rows(&self) -> &[Vec<u8>; 2] {
        &self.rows
    }

    /// The score of the alignment.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// The length of the aligned rows.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Swap the two sides of the alignment.
    #[must_use]
    pub fn flipped(self) -> Self {
        let [x_name, y_name] = self.names;
        let [x_row, y_row] = self.rows;
        Self {
            names: [y_name, x_name],
            rows: [y_row, x_row],
            score: self.score,
        }
    }

    /// Consume the alignment, returning the names and rows.
    #[must_use]
    pub fn into_parts(self) -> ([String; 2], [Vec<u8>; 2]) {
        (self.names, self.rows)
    }
}
