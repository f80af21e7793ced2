/*
 * Input generators shared by the integration tests.
 *
 */

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Length of the generated inputs.
pub const INPUT_LENGTH: usize = 100_000;

/// Bytes drawn uniformly from the whole byte range.
pub fn uniform_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

/// Bytes drawn from `alphabet`, where each symbol is twice as likely as the next one.
pub fn skewed_bytes(seed: u64, len: usize, alphabet: &[u8]) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let mut i = 0;
            while i + 1 < alphabet.len() && rng.gen_bool(0.5) {
                i += 1;
            }
            alphabet[i]
        })
        .collect()
}
