//! Benchmark workloads for the tightstack container.
//!
//! Provides seeded, deterministic value sequences and pre-filled stacks
//! so benchmark runs are reproducible across machines and runs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tightstack::ArrayStack;

/// Generate `n` deterministic pseudo-random values from `seed`.
pub fn values(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u32() as i32).collect()
}

/// Build a stack of depth `n` filled with seeded values.
pub fn filled_stack(n: usize, seed: u64) -> ArrayStack {
    ArrayStack::from(values(n, seed))
}
