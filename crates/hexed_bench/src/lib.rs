//! Benchmark utilities.

use rand::Rng;

/// Generate random bytes of the specified size.
pub fn random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// Generate random bytes with `needle` planted every `stride` bytes.
pub fn seeded_haystack(size: usize, needle: &[u8], stride: usize) -> Vec<u8> {
    let mut data = random_data(size);
    let stride = stride.max(needle.len()).max(1);
    let mut at = 0;
    while at + needle.len() <= size {
        data[at..at + needle.len()].copy_from_slice(needle);
        at += stride;
    }
    data
}
