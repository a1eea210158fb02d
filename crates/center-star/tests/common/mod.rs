//! Random sequences for tests.

#![allow(dead_code)]

use rand::prelude::*;

/// The amino-acid alphabet.
pub const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// A random string of `len` amino acids.
pub fn random_residues(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    residues(&mut rng, len)
}

/// `n` named random sequences with lengths in `[min_len, max_len]`.
///
/// Each sequence is a mutated copy of a common ancestor so that the
/// alignments have some structure.
pub fn random_sequences(n: usize, min_len: usize, max_len: usize, seed: u64) -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let ancestor = residues(&mut rng, max_len).into_bytes();

    (0..n)
        .map(|i| {
            let len = rng.gen_range(min_len..=max_len);
            let mut seq = ancestor.clone();
            while seq.len() > len {
                let at = rng.gen_range(0..seq.len());
                seq.remove(at);
            }
            for c in &mut seq {
                if rng.gen_bool(0.2) {
                    *c = AMINO_ACIDS[rng.gen_range(0..AMINO_ACIDS.len())];
                }
            }
            (format!("seq_{i}"), String::from_utf8(seq).unwrap())
        })
        .collect()
}

/// A random string of amino acids.
fn residues<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| AMINO_ACIDS[rng.gen_range(0..AMINO_ACIDS.len())] as char)
        .collect()
}
