//! Padding the merged rows into a uniform-width alignment.

use crate::{Msa, MsaError};

use super::merge::MergedCenter;

/// Pad every row that is shorter than the merged center and assemble the
/// alignment with the center first.
///
/// Missing gaps go into a short row at the center's own gap columns, in
/// ascending order, until the row is as wide as the center.
///
/// # Errors
///
/// * If a row cannot be brought to the width of the center.
pub fn finalize(merged: MergedCenter, gap: u8) -> Result<Msa, MsaError> {
    let MergedCenter { name, center, others } = merged;
    let width = center.len();
    let gap_indices = center
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == gap)
        .map(|(i, _)| i)
        .collect::<Vec<_>>();

    let mut rows = Vec::with_capacity(1 + others.len());
    rows.push((name, center));
    for (name, mut row) in others {
        for &i in &gap_indices {
            if row.len() >= width {
                break;
            }
            row.insert(i.min(row.len()), gap);
        }
        if row.len() != width {
            return Err(MsaError::RaggedAlignment {
                name,
                expected: width,
                found: row.len(),
            });
        }
        rows.push((name, row));
    }

    ftlog::trace!("Finalized {} rows with width {width}", rows.len());

    Msa::new(rows, gap)
}
