//! Multiple sequence alignments and their quality.

mod quality;

use core::ops::Index;

use crate::MsaError;

pub use quality::Statistics;

/// A multiple sequence alignment (MSA).
///
/// Every row has the same width. For alignments built by
/// [`CenterStar`](crate::CenterStar) the center sequence is the first row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Msa {
    /// The names of the aligned sequences.
    names: Vec<String>,
    /// The aligned sequences.
    rows: Vec<Vec<u8>>,
    /// The gap character.
    gap: u8,
}

impl Msa {
    /// Create an MSA from named rows.
    ///
    /// # Errors
    ///
    /// * If the rows do not all have the same width.
    pub fn new<N: Into<String>, R: Into<Vec<u8>>>(rows: Vec<(N, R)>, gap: u8) -> Result<Self, MsaError> {
        let (names, rows): (Vec<String>, Vec<Vec<u8>>) =
            rows.into_iter().map(|(name, row)| (name.into(), row.into())).unzip();

        let width = rows.first().map_or(0, Vec::len);
        if let Some((name, row)) = names.iter().zip(rows.iter()).find(|(_, row)| row.len() != width) {
            return Err(MsaError::RaggedAlignment {
                name: name.clone(),
                expected: width,
                found: row.len(),
            });
        }

        Ok(Self { names, rows, gap })
    }

    /// The names of the sequences in the MSA.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The sequences in the MSA.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// The row at `index`, with its name.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<(&str, &[u8])> {
        self.names
            .get(index)
            .zip(self.rows.get(index))
            .map(|(n, r)| (n.as_str(), r.as_slice()))
    }

    /// Iterate over the named rows.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    /// The gap character.
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.gap
    }

    /// The number of sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the MSA has no sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The bytes of column `i`, top to bottom.
    #[must_use]
    pub fn column(&self, i: usize) -> Vec<u8> {
        self.rows.iter().filter_map(|row| row.get(i).copied()).collect()
    }

    /// The sequences in the MSA as strings.
    #[must_use]
    pub fn strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|v| String::from_utf8_lossy(v).to_string())
            .collect()
    }
}

impl Index<usize> for Msa {
    type Output = [u8];

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}
