//! Named, unaligned input sequences.

/// The gap character used in every aligned row.
pub const GAP: u8 = b'-';

/// A named sequence of residues.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sequence {
    /// The name of the sequence, usually its FASTA header.
    name: String,
    /// The residues.
    residues: Vec<u8>,
}

impl Sequence {
    /// Create a new sequence.
    pub fn new<N: Into<String>, R: AsRef<[u8]>>(name: N, residues: R) -> Self {
        Self {
            name: name.into(),
            residues: residues.as_ref().to_vec(),
        }
    }

    /// The name of the sequence.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The residues of the sequence.
    #[must_use]
    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    /// The number of residues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Whether the sequence has no residues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.residues
    }
}

impl<N: Into<String>, R: AsRef<[u8]>> From<(N, R)> for Sequence {
    fn from((name, residues): (N, R)) -> Self {
        Self::new(name, residues)
    }
}

/// Removes every gap from an aligned row.
#[must_use]
pub fn ungapped(row: &[u8]) -> Vec<u8> {
    row.iter().copied().filter(|&c| c != GAP).collect()
}
