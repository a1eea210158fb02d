//! Selection of the center sequence from the pairwise alignment scores.

use crate::DpTable;

/// The optimal pairwise score of every unordered pair of sequences.
///
/// Pairs `(i, j)` with `i < j` are stored in row-major order, which is also
/// the order in which they are aligned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairScores {
    /// The number of sequences.
    n: usize,
    /// The scores, one per pair.
    scores: Vec<i64>,
}

impl PairScores {
    /// Collect the terminal scores of the DP tables of every pair.
    ///
    /// `tables` must hold one table per pair, in the order of
    /// [`PairScores::pairs`].
    pub(crate) fn from_tables(n: usize, tables: &[((usize, usize), DpTable)]) -> Self {
        let scores = tables.iter().map(|(_, table)| table.score()).collect();
        Self { n, scores }
    }

    /// Iterate over the pairs `(i, j)` with `i < j < n` in row-major order.
    pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
    }

    /// The number of sequences.
    #[must_use]
    pub const fn cardinality(&self) -> usize {
        self.n
    }

    /// The position of the pair `(i, j)`, `i < j`, in the row-major order.
    const fn pair_index(&self, i: usize, j: usize) -> usize {
        // Pairs in the rows before `i`, then the offset within row `i`.
        i * (2 * self.n - i - 1) / 2 + (j - i - 1)
    }

    /// The optimal score of aligning sequences `i` and `j`.
    ///
    /// Returns `None` if `i == j` or either index is out of range.
    #[must_use]
    pub fn score(&self, i: usize, j: usize) -> Option<i64> {
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        if i == j || j >= self.n {
            None
        } else {
            self.scores.get(self.pair_index(i, j)).copied()
        }
    }

    /// The sum of the scores of every pair that involves sequence `i`.
    #[must_use]
    pub fn total(&self, i: usize) -> i64 {
        (0..self.n)
            .filter_map(|j| self.score(i, j))
            .sum()
    }

    /// The index of the sequence with the highest total score.
    ///
    /// Ties go to the sequence that comes first.
    #[must_use]
    pub fn center(&self) -> usize {
        let mut best = (0, self.total(0));
        for i in 1..self.n {
            let total = self.total(i);
            if total > best.1 {
                best = (i, total);
            }
        }
        best.0
    }
}
