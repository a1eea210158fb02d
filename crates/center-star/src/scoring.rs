//! Scoring schemes for building and for reporting alignments.

use serde::{Deserialize, Serialize};

use super::sequence::GAP;

/// The scores used to fill the Needleman-Wunsch DP tables.
///
/// Alignments maximize the total score, so `gap_penalty` and
/// `mismatch_score` are usually negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringScheme {
    /// Score for aligning two identical residues.
    pub match_score: i32,
    /// Score for aligning two different residues.
    pub mismatch_score: i32,
    /// Score for aligning a residue against a gap.
    pub gap_penalty: i32,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self::new(1, -1, -2)
    }
}

impl ScoringScheme {
    /// Create a new scoring scheme.
    #[must_use]
    pub const fn new(match_score: i32, mismatch_score: i32, gap_penalty: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_penalty,
        }
    }

    /// Set the score for a match.
    #[must_use]
    pub const fn with_match_score(mut self, score: i32) -> Self {
        self.match_score = score;
        self
    }

    /// Set the score for a mismatch.
    #[must_use]
    pub const fn with_mismatch_score(mut self, score: i32) -> Self {
        self.mismatch_score = score;
        self
    }

    /// Set the penalty for a gap.
    #[must_use]
    pub const fn with_gap_penalty(mut self, penalty: i32) -> Self {
        self.gap_penalty = penalty;
        self
    }

    /// The score of aligning residue `a` with residue `b`.
    #[must_use]
    pub const fn sub_score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

/// The scores used for the sum-of-pairs score of a finished alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportScheme {
    /// Score for a column pair with identical residues.
    #[serde(rename = "match")]
    pub match_: i32,
    /// Score for a column pair with different residues.
    pub substitution: i32,
    /// Score for a column pair with exactly one gap.
    pub gap: i32,
}

impl Default for ReportScheme {
    fn default() -> Self {
        Self::new(1, -1, -2)
    }
}

impl ReportScheme {
    /// Create a new reporting scheme.
    #[must_use]
    pub const fn new(match_: i32, substitution: i32, gap: i32) -> Self {
        Self {
            match_,
            substitution,
            gap,
        }
    }

    /// Set the score for a match.
    #[must_use]
    pub const fn with_match(mut self, score: i32) -> Self {
        self.match_ = score;
        self
    }

    /// Set the score for a substitution.
    #[must_use]
    pub const fn with_substitution(mut self, score: i32) -> Self {
        self.substitution = score;
        self
    }

    /// Set the score for a gap.
    #[must_use]
    pub const fn with_gap(mut self, score: i32) -> Self {
        self.gap = score;
        self
    }

    /// The score of one column for one pair of rows.
    ///
    /// Two gaps score zero.
    #[must_use]
    pub const fn pair_score(&self, a: u8, b: u8) -> i32 {
        match (a == GAP, b == GAP) {
            (true, true) => 0,
            (true, false) | (false, true) => self.gap,
            (false, false) if a == b => self.match_,
            (false, false) => self.substitution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let scheme = ScoringScheme::default()
            .with_match_score(5)
            .with_mismatch_score(-4)
            .with_gap_penalty(-10);
        assert_eq!(scheme, ScoringScheme::new(5, -4, -10));
        assert_eq!(scheme.sub_score(b'A', b'A'), 5);
        assert_eq!(scheme.sub_score(b'A', b'C'), -4);

        let report = ReportScheme::default().with_match(2).with_substitution(0).with_gap(-3);
        assert_eq!(report, ReportScheme::new(2, 0, -3));
    }

    #[test]
    fn pair_scores() {
        let report = ReportScheme::new(3, -1, -2);
        assert_eq!(report.pair_score(GAP, GAP), 0);
        assert_eq!(report.pair_score(GAP, b'A'), -2);
        assert_eq!(report.pair_score(b'A', GAP), -2);
        assert_eq!(report.pair_score(b'A', b'A'), 3);
        assert_eq!(report.pair_score(b'A', b'W'), -1);
    }
}
