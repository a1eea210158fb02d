//! Needleman-Wunsch algorithm for global sequence alignment.

mod aligner;
mod ops;
mod table;

pub use aligner::{Aligner, PairwiseAlignment};
pub use ops::Direction;
pub use table::{DpCell, DpTable};

#[cfg(test)]
mod tests {
    use crate::ScoringScheme;

    use super::*;

    #[test]
    fn score() {
        let aligner = Aligner::default();

        assert_eq!(aligner.score("ACGT", "ACGT"), 4);
        assert_eq!(aligner.score("AC", "AG"), 0);
        assert_eq!(aligner.score("ACGT", "ACT"), 1);
        assert_eq!(aligner.score("ACT", "ACGT"), 1);
        assert_eq!(aligner.score("", "ACG"), -6);
        assert_eq!(aligner.score("", ""), 0);
    }

    #[test]
    fn test_compute_table() {
        let aligner = Aligner::default();
        let table = aligner.dp_table("ACGT", "ACT");

        #[rustfmt::skip]
        let true_table: [[(i64, (usize, usize)); 4]; 5] = [
            [( 0, (0, 0)), (-2, (0, 0)), (-4, (0, 1)), (-6, (0, 2))],
            [(-2, (0, 0)), ( 1, (0, 0)), (-1, (1, 1)), (-3, (1, 2))],
            [(-4, (1, 0)), (-1, (1, 1)), ( 2, (1, 1)), ( 0, (2, 2))],
            [(-6, (2, 0)), (-3, (2, 1)), ( 0, (2, 2)), ( 1, (2, 2))],
            [(-8, (3, 0)), (-5, (3, 1)), (-2, (3, 2)), ( 1, (3, 2))],
        ];

        assert_eq!(table.rows(), 5);
        assert_eq!(table.cols(), 4);
        for (i, row) in true_table.iter().enumerate() {
            for (j, &(score, pred)) in row.iter().enumerate() {
                assert_eq!(table[(i, j)], DpCell::new(score, pred), "cell ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_trace_back() {
        let aligner = Aligner::default();

        let table = aligner.dp_table("ACGT", "ACT");
        let [x, y] = aligner.align_str("ACGT", "ACT", &table).unwrap();
        assert_eq!(x, "ACGT");
        assert_eq!(y, "AC-T");

        let table = aligner.dp_table("ACGT", "AGT");
        let [x, y] = aligner.align_str("ACGT", "AGT", &table).unwrap();
        assert_eq!(x, "ACGT");
        assert_eq!(y, "A-GT");

        let table = aligner.dp_table("AC", "AG");
        let [x, y] = aligner.align_str("AC", "AG", &table).unwrap();
        assert_eq!(x, "AC");
        assert_eq!(y, "AG");
    }

    #[test]
    fn ties_prefer_vertical_then_horizontal() {
        let aligner = Aligner::default();

        // (2, 1) ties between the vertical and the diagonal step.
        let table = aligner.dp_table("AA", "A");
        assert_eq!(table.direction(2, 1), Some(Direction::Vertical));
        let [x, y] = aligner.align_str("AA", "A", &table).unwrap();
        assert_eq!(x, "AA");
        assert_eq!(y, "A-");

        // (1, 2) ties between the horizontal and the diagonal step.
        let table = aligner.dp_table("A", "AA");
        assert_eq!(table.direction(1, 2), Some(Direction::Horizontal));
        let [x, y] = aligner.align_str("A", "AA", &table).unwrap();
        assert_eq!(x, "A-");
        assert_eq!(y, "AA");
    }

    #[test]
    fn empty_sequences() {
        let aligner = Aligner::new(ScoringScheme::new(2, -1, -3));

        let table = aligner.dp_table("", "WKV");
        assert_eq!(table.score(), -9);
        let [x, y] = aligner.align_str("", "WKV", &table).unwrap();
        assert_eq!(x, "---");
        assert_eq!(y, "WKV");

        let table = aligner.dp_table("WK", "");
        let [x, y] = aligner.align_str("WK", "", &table).unwrap();
        assert_eq!(x, "WK");
        assert_eq!(y, "--");

        let table = aligner.dp_table("", "");
        let [x, y] = aligner.align_str("", "", &table).unwrap();
        assert!(x.is_empty() && y.is_empty());
    }

    #[test]
    fn extreme_scores() {
        let aligner = Aligner::new(ScoringScheme::new(i32::MAX, i32::MIN, -1_000_000_000));

        assert_eq!(aligner.score("WKVW", "WKVW"), 4 * i64::from(i32::MAX));
        assert_eq!(aligner.score("ACG", ""), -3_000_000_000);

        let table = aligner.dp_table("ACG", "");
        let [x, y] = aligner.align_str("ACG", "", &table).unwrap();
        assert_eq!(x, "ACG");
        assert_eq!(y, "---");
    }

    #[test]
    fn mismatched_table() {
        let aligner = Aligner::default();
        let table = aligner.dp_table("ACGT", "ACT");
        assert_eq!(
            aligner.align("ACG", "ACT", &table),
            Err(crate::MsaError::CorruptTable { row: 3, col: 3 })
        );
    }

    #[test]
    fn pair_flips() {
        let aligner = Aligner::default();
        let pair = aligner.align_pair(("S1", "ACGT"), ("S2", "AGT")).unwrap();
        assert_eq!(pair.score(), 1);
        assert_eq!(pair.width(), 4);

        let flipped = pair.clone().flipped();
        assert_eq!(flipped.names(), &["S2".to_string(), "S1".to_string()]);
        assert_eq!(flipped.rows(), &[b"A-GT".to_vec(), b"ACGT".to_vec()]);
        assert_eq!(flipped.score(), pair.score());
    }
}
