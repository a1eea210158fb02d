//! The center-star multiple sequence alignment.

mod center;
mod finalize;
mod merge;

use serde::{Deserialize, Serialize};

use crate::{Aligner, DpTable, Msa, MsaError, PairwiseAlignment, ReportScheme, ScoringScheme, Sequence, Statistics};

pub use center::PairScores;

/// A multiple sequence alignment built with the center-star method.
///
/// The whole pipeline runs in [`CenterStar::new`]:
///
/// 1. Every pair of sequences is aligned with the Needleman-Wunsch algorithm.
/// 2. The sequence with the highest total pairwise score becomes the center.
/// 3. The pairwise alignments against the center are traced back, center
///    first.
/// 4. The gaps of every copy of the center are merged and propagated to the
///    other rows.
/// 5. Rows still shorter than the center are padded.
/// 6. The column statistics and the sum-of-pairs score are computed.
///
/// Nothing changes after construction.
#[derive(Clone, Debug)]
pub struct CenterStar {
    /// The input sequences.
    sequences: Vec<Sequence>,
    /// The scores used to build the pairwise alignments.
    scoring: ScoringScheme,
    /// The scores used for the sum-of-pairs score.
    report: ReportScheme,
    /// The optimal score of every pair.
    pair_scores: PairScores,
    /// The index of the center sequence.
    center: usize,
    /// The final alignment.
    alignment: Msa,
    /// The column statistics of the final alignment.
    statistics: Statistics,
    /// The sum-of-pairs score of the final alignment.
    score: i64,
}

impl CenterStar {
    /// Align the given sequences.
    ///
    /// # Arguments
    ///
    /// * `sequences` - The sequences, in their canonical order. Ties are
    ///   broken in favor of earlier sequences.
    /// * `scoring` - The scores for building the pairwise alignments.
    /// * `report` - The scores for the reported sum-of-pairs score.
    ///
    /// # Errors
    ///
    /// * If there are fewer than two sequences.
    /// * If an internal invariant of the alignment is violated.
    pub fn new<S: Into<Sequence>>(
        sequences: Vec<S>,
        scoring: ScoringScheme,
        report: ReportScheme,
    ) -> Result<Self, MsaError> {
        let sequences = sequences.into_iter().map(Into::into).collect::<Vec<_>>();
        let n = sequences.len();
        if n < 2 {
            return Err(MsaError::TooFewSequences(n));
        }

        let aligner = Aligner::new(scoring);

        let tables = PairScores::pairs(n)
            .map(|(i, j)| ((i, j), aligner.dp_table(&sequences[i], &sequences[j])))
            .collect::<Vec<_>>();
        ftlog::debug!("Built {} pairwise DP tables for {n} sequences", tables.len());

        let pair_scores = PairScores::from_tables(n, &tables);
        let center = pair_scores.center();
        ftlog::debug!(
            "Chose sequence {center} ({}) as the center with total score {}",
            sequences[center].name(),
            pair_scores.total(center)
        );

        let star = star_alignments(&aligner, &sequences, center, tables)?;
        let merged = merge::merge(star, aligner.gap())?;
        let alignment = finalize::finalize(merged, aligner.gap())?;

        let statistics = alignment.statistics();
        let score = alignment.sum_of_pairs(&report);
        ftlog::debug!(
            "Aligned {n} sequences with width {}, score {score} and identity {}%",
            alignment.width(),
            statistics.identity_percent
        );

        Ok(Self {
            sequences,
            scoring,
            report,
            pair_scores,
            center,
            alignment,
            statistics,
            score,
        })
    }

    /// The input sequences.
    #[must_use]
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// The scores used to build the pairwise alignments.
    #[must_use]
    pub const fn scoring(&self) -> ScoringScheme {
        self.scoring
    }

    /// The scores used for the sum-of-pairs score.
    #[must_use]
    pub const fn report(&self) -> ReportScheme {
        self.report
    }

    /// The optimal score of every pair of input sequences.
    #[must_use]
    pub const fn pair_scores(&self) -> &PairScores {
        &self.pair_scores
    }

    /// The index of the center sequence in the input.
    #[must_use]
    pub const fn center(&self) -> usize {
        self.center
    }

    /// The name of the center sequence.
    #[must_use]
    pub fn center_name(&self) -> &str {
        self.sequences[self.center].name()
    }

    /// The final alignment, center first, then the other sequences in input
    /// order.
    #[must_use]
    pub const fn alignment(&self) -> &Msa {
        &self.alignment
    }

    /// The column statistics of the final alignment.
    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        self.statistics
    }

    /// The sum-of-pairs score of the final alignment.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// A serializable summary of the alignment.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            center: self.center_name().to_string(),
            score: self.score,
            statistics: self.statistics,
            scoring: self.scoring,
            report: self.report,
            alignment: self
                .alignment
                .iter()
                .map(|(name, row)| (name.to_string(), String::from_utf8_lossy(row).into_owned()))
                .collect(),
        }
    }
}

/// Trace back every table that involves the center, center row first.
///
/// The remaining tables are dropped.
fn star_alignments(
    aligner: &Aligner,
    sequences: &[Sequence],
    center: usize,
    tables: Vec<((usize, usize), DpTable)>,
) -> Result<Vec<PairwiseAlignment>, MsaError> {
    tables
        .into_iter()
        .filter(|&((i, j), _)| i == center || j == center)
        .map(|((i, j), table)| {
            let (x, y) = (&sequences[i], &sequences[j]);
            let pair = PairwiseAlignment::from_table(aligner, (x.name(), x), (y.name(), y), &table)?;
            Ok(if i == center { pair } else { pair.flipped() })
        })
        .collect()
}

/// The outputs of a center-star alignment, ready for reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The name of the center sequence.
    pub center: String,
    /// The sum-of-pairs score.
    pub score: i64,
    /// The column statistics.
    pub statistics: Statistics,
    /// The scores used to build the pairwise alignments.
    pub scoring: ScoringScheme,
    /// The scores used for the sum-of-pairs score.
    pub report: ReportScheme,
    /// The aligned rows with their names, center first.
    pub alignment: Vec<(String, String)>,
}
