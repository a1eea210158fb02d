//! Quality metrics for MSAs.

use serde::{Deserialize, Serialize};

use crate::ReportScheme;

use super::Msa;

/// Column statistics of an MSA.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Columns in which every row has the same character, gaps included.
    #[serde(rename = "match")]
    pub match_: usize,
    /// Columns with differing residues and no gaps.
    pub mismatch: usize,
    /// Columns with differing characters, at least one of them a gap.
    pub gap: usize,
    /// Percentage of matching columns, rounded to two decimals.
    pub identity_percent: f64,
}

impl Statistics {
    /// The number of columns that were classified.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.match_ + self.mismatch + self.gap
    }
}

impl Msa {
    /// Classifies every column of the MSA as a match, a mismatch or a gap.
    ///
    /// A column is a match when every row carries the same character, which
    /// makes an all-gap column a match. Otherwise it is a gap column if any
    /// row has a gap there, and a mismatch column if none does.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn statistics(&self) -> Statistics {
        let (mut match_, mut mismatch, mut gap) = (0, 0, 0);

        for i in 0..self.width() {
            let column = self.column(i);
            if column.iter().all(|&c| c == column[0]) {
                match_ += 1;
            } else if column.contains(&self.gap) {
                gap += 1;
            } else {
                mismatch += 1;
            }
        }

        let identity_percent = if self.width() == 0 {
            0.0
        } else {
            let percent = 100.0 * match_ as f64 / self.width() as f64;
            (percent * 100.0).round() / 100.0
        };

        Statistics {
            match_,
            mismatch,
            gap,
            identity_percent,
        }
    }

    /// Scores each pairwise alignment in the MSA and sums the scores.
    ///
    /// Every unordered pair of rows is compared column by column: two gaps
    /// score zero, one gap scores `report.gap`, identical residues score
    /// `report.match_` and different residues score `report.substitution`.
    #[must_use]
    pub fn sum_of_pairs(&self, report: &ReportScheme) -> i64 {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, s1)| self.rows.iter().skip(i + 1).map(move |s2| (s1, s2)))
            .map(|(s1, s2)| {
                s1.iter()
                    .zip(s2.iter())
                    .fold(0, |score, (&a, &b)| score + i64::from(report.pair_score(a, b)))
            })
            .sum()
    }
}
