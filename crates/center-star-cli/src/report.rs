//! Rendering an alignment as text and saving its summary.

use std::path::Path;

use center_star::{CenterStar, Summary};

/// The text formats for a rendered alignment.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Names and rows side by side.
    Clustal,
    /// One `>name` line per row, followed by the row.
    Fasta,
}

impl Format {
    /// The name of the format in the header line.
    const fn title(self) -> &'static str {
        match self {
            Self::Clustal => "CLUSTAL",
            Self::Fasta => "FASTA",
        }
    }

    /// Renders the alignment with its statistics and scores.
    pub fn render(self, msa: &CenterStar) -> String {
        let rows: String = match self {
            Self::Clustal => {
                let width = msa.alignment().names().iter().map(String::len).max().unwrap_or(0);
                msa.alignment()
                    .iter()
                    .map(|(name, row)| format!("{name:<width$}  {}\n", String::from_utf8_lossy(row)))
                    .collect()
            }
            Self::Fasta => msa
                .alignment()
                .iter()
                .map(|(name, row)| format!(">{name}\n{}\n", String::from_utf8_lossy(row)))
                .collect(),
        };
        format!("{}{rows}", self.header(msa))
    }

    /// The blocks shared by every format, up to and including `Alignments:`.
    fn header(self, msa: &CenterStar) -> String {
        let stats = msa.statistics();
        let scoring = msa.scoring();
        let report = msa.report();

        format!(
            "Multiple Sequence Alignment in {title} Format\n\n\
             Statistics:\n\
             Identity: {identity:.2}%\n\
             Score: {score}\n\
             Number of Matches: {matches}\n\
             Number of MisMatches: {mismatches}\n\
             Number of Gaps: {gaps}\n\n\
             Matrix Scores:\n\
             Match Score: {match_score}\n\
             Mismatch Score: {mismatch_score}\n\
             Gap Penalty: {gap_penalty}\n\n\
             Scoring Result:\n\
             Match: {match_}\n\
             Substitution: {substitution}\n\
             Gap: {gap}\n\n\
             Alignments:\n",
            title = self.title(),
            identity = stats.identity_percent,
            score = msa.score(),
            matches = stats.match_,
            mismatches = stats.mismatch,
            gaps = stats.gap,
            match_score = scoring.match_score,
            mismatch_score = scoring.mismatch_score,
            gap_penalty = scoring.gap_penalty,
            match_ = report.match_,
            substitution = report.substitution,
            gap = report.gap,
        )
    }
}

/// Saves the summary as pretty-printed JSON.
///
/// # Errors
///
/// * If the summary cannot be serialized.
/// * If the file cannot be written.
pub fn write_summary(summary: &Summary, path: &Path) -> Result<(), String> {
    let report = serde_json::to_string_pretty(summary).map_err(|e| e.to_string())?;
    std::fs::write(path, report).map_err(|e| format!("Failed to write {path:?}: {e}"))
}
