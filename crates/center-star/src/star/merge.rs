//! Merging the center's pairwise gap patterns into one coordinate system.

use crate::{MsaError, PairwiseAlignment};

/// The center sequence with every gap any pairwise alignment gave it, and the
/// other rows synchronized to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedCenter {
    /// The name of the center sequence.
    pub name: String,
    /// The gapped center row.
    pub center: Vec<u8>,
    /// The other rows, in the order of the pairwise alignments.
    pub others: Vec<(String, Vec<u8>)>,
}

/// Merge pairwise alignments that all have the same center row first.
///
/// A cursor walks the columns of every copy of the center in lockstep. When
/// any copy shows a gap (or has run out), a gap is inserted into every copy
/// that does not, together with the row paired with that copy. Otherwise all
/// copies must agree on the residue. Only the center's gaps are reconciled,
/// so the result need not be the shortest consistent alignment.
///
/// # Errors
///
/// * If `alignments` is empty.
/// * If two copies of the center disagree on a residue.
pub fn merge(alignments: Vec<PairwiseAlignment>, gap: u8) -> Result<MergedCenter, MsaError> {
    let Some(first) = alignments.first() else {
        return Err(MsaError::TooFewSequences(1));
    };
    let name = first.names()[0].clone();

    let (mut copies, mut others): (Vec<_>, Vec<_>) = alignments
        .into_iter()
        .map(|a| {
            let ([_, other_name], [copy, other]) = a.into_parts();
            (copy, (other_name, other))
        })
        .unzip();

    let mut center = Vec::with_capacity(copies.iter().map(Vec::len).max().unwrap_or_default());
    let mut i = 0;
    while copies.iter().any(|copy| i < copy.len()) {
        let any_gap = copies.iter().any(|copy| copy.get(i).map_or(true, |&c| c == gap));

        if any_gap {
            for (copy, (_, other)) in copies.iter_mut().zip(others.iter_mut()) {
                if copy.get(i) != Some(&gap) {
                    copy.insert(i, gap);
                    other.insert(i.min(other.len()), gap);
                }
            }
            center.push(gap);
        } else {
            let residue = copies[0][i];
            if let Some(&found) = copies.iter().map(|copy| &copy[i]).find(|&&c| c != residue) {
                return Err(MsaError::CenterMismatch {
                    column: i,
                    expected: residue as char,
                    found: found as char,
                });
            }
            center.push(residue);
        }

        i += 1;
    }

    ftlog::trace!(
        "Merged {} copies of center {name} into width {}",
        copies.len(),
        center.len()
    );

    Ok(MergedCenter { name, center, others })
}

#[cfg(test)]
mod tests {
    use crate::{Aligner, MsaError, GAP};

    use super::merge;

    #[test]
    fn no_center_gaps() {
        let aligner = Aligner::default();
        let alignments = vec![
            aligner.align_pair(("S1", "ACGT"), ("S2", "ACT")).unwrap(),
            aligner.align_pair(("S1", "ACGT"), ("S3", "AGT")).unwrap(),
        ];

        let merged = merge(alignments, GAP).unwrap();
        assert_eq!(merged.name, "S1");
        assert_eq!(merged.center, b"ACGT".to_vec());
        assert_eq!(
            merged.others,
            vec![
                ("S2".to_string(), b"AC-T".to_vec()),
                ("S3".to_string(), b"A-GT".to_vec())
            ]
        );
    }

    #[test]
    fn center_gaps_are_propagated() {
        let aligner = Aligner::default();
        let alignments = vec![
            aligner.align_pair(("C", "AT"), ("X", "AGT")).unwrap(),
            aligner.align_pair(("C", "AT"), ("Y", "ATCC")).unwrap(),
        ];
        assert_eq!(alignments[0].rows(), &[b"A-T".to_vec(), b"AGT".to_vec()]);
        assert_eq!(alignments[1].rows(), &[b"AT--".to_vec(), b"ATCC".to_vec()]);

        let merged = merge(alignments, GAP).unwrap();
        assert_eq!(merged.center, b"A-T--".to_vec());
        assert_eq!(merged.others[0].1, b"AGT--".to_vec());
        assert_eq!(merged.others[1].1, b"A-TCC".to_vec());
    }

    #[test]
    fn disagreeing_copies() {
        let aligner = Aligner::default();
        let alignments = vec![
            aligner.align_pair(("C", "ACGT"), ("X", "ACGT")).unwrap(),
            aligner.align_pair(("C", "AGGT"), ("Y", "AGGT")).unwrap(),
        ];

        assert_eq!(
            merge(alignments, GAP),
            Err(MsaError::CenterMismatch {
                column: 1,
                expected: 'C',
                found: 'G'
            })
        );
    }

    #[test]
    fn nothing_to_merge() {
        assert_eq!(merge(Vec::new(), GAP), Err(MsaError::TooFewSequences(1)));
    }
}
