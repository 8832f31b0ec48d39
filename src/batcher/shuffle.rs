use rand::Rng;

use super::SHUFFLE_PASSES;

/// Return a uniformly permuted copy of `items`, leaving the input untouched.
///
/// Runs [`SHUFFLE_PASSES`] full Fisher-Yates passes back to back. A seeded
/// rng therefore yields the same order only with the same pass count.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for _ in 0..SHUFFLE_PASSES {
        fisher_yates(&mut out, rng);
    }
    out
}

fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
