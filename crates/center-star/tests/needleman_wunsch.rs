//! Tests for the Needleman-Wunsch aligner in `center-star`.

use center_star::{ungapped, Aligner, ScoringScheme};
use test_case::test_case;

mod common;

#[test_case(ScoringScheme::new(1, -1, -2), 10, 1 ; "default scores")]
#[test_case(ScoringScheme::new(2, -3, -1), 10, 2 ; "cheap gaps")]
#[test_case(ScoringScheme::new(5, -4, -10), 10, 3 ; "expensive gaps")]
#[test_case(ScoringScheme::new(1, 1, 1), 6, 4 ; "positive gaps")]
fn symmetric_scores(scoring: ScoringScheme, n: usize, seed: u64) {
    let aligner = Aligner::new(scoring);
    let sequences = common::random_sequences(n, 0, 30, seed);

    for (i, (_, x)) in sequences.iter().enumerate() {
        for (_, y) in sequences.iter().skip(i) {
            assert_eq!(
                aligner.score(x, y),
                aligner.score(y, x),
                "Scores differ for {x} and {y}"
            );
        }
    }
}

#[test_case(ScoringScheme::new(1, -1, -2), 10, 5 ; "default scores")]
#[test_case(ScoringScheme::new(2, -3, -1), 10, 6 ; "cheap gaps")]
#[test_case(ScoringScheme::new(0, 0, 0), 6, 7 ; "all zero")]
fn traceback_restores_inputs(scoring: ScoringScheme, n: usize, seed: u64) {
    let aligner = Aligner::new(scoring);
    let sequences = common::random_sequences(n, 0, 30, seed);

    for (x_name, x) in &sequences {
        for (y_name, y) in &sequences {
            let pair = aligner.align_pair((x_name.as_str(), x), (y_name.as_str(), y)).unwrap();
            let [x_row, y_row] = pair.rows();

            assert_eq!(x_row.len(), y_row.len());
            assert_eq!(ungapped(x_row), x.as_bytes());
            assert_eq!(ungapped(y_row), y.as_bytes());
            assert!(
                x_row.iter().zip(y_row.iter()).all(|(&a, &b)| a != b'-' || b != b'-'),
                "A column of {x_name} and {y_name} has two gaps"
            );
            assert_eq!(pair.score(), aligner.score(x, y));
        }
    }
}

#[test]
fn traced_score_matches_table() {
    let scoring = ScoringScheme::new(2, -1, -2);
    let aligner = Aligner::new(scoring);
    let sequences = common::random_sequences(8, 5, 25, 8);

    for (_, x) in &sequences {
        for (_, y) in &sequences {
            let table = aligner.dp_table(x, y);
            let [x_row, y_row] = aligner.align(x, y, &table).unwrap();

            let traced = x_row
                .iter()
                .zip(y_row.iter())
                .map(|(&a, &b)| {
                    if a == b'-' || b == b'-' {
                        i64::from(scoring.gap_penalty)
                    } else {
                        i64::from(scoring.sub_score(a, b))
                    }
                })
                .sum::<i64>();
            assert_eq!(traced, table.score());
        }
    }
}
