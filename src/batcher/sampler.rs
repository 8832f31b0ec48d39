use rand::Rng;
use tracing::{debug, warn};

use super::shuffle::shuffle;
use super::{MAX_SAME_POSITIONS, MAX_SAMPLE_ATTEMPTS};
use crate::taxonomy::Classified;

/// Outcome of one anti-repetition draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleReport {
    /// Shuffles performed (1..=MAX_SAMPLE_ATTEMPTS)
    pub attempts: usize,
    /// Positions where the returned batch repeats the previous one
    pub same_positions: usize,
    /// Whether the returned batch stays under MAX_SAME_POSITIONS
    pub within_bound: bool,
}

/// Draw `target` items from `all` that avoid repeating `previous` position by position.
pub fn sample<T, R>(all: &[T], previous: &[T], target: usize, rng: &mut R) -> Vec<T>
where
    T: Classified + Clone,
    R: Rng + ?Sized,
{
    sample_with_report(all, previous, target, rng).0
}

/// Same as [`sample`], also reporting how the draw went.
///
/// Each attempt shuffles the whole collection and keeps the first `target`
/// items. The first candidate with fewer than [`MAX_SAME_POSITIONS`]
/// same-position matches wins; after [`MAX_SAMPLE_ATTEMPTS`] misses the last
/// candidate is returned anyway, so this always terminates.
pub fn sample_with_report<T, R>(
    all: &[T],
    previous: &[T],
    target: usize,
    rng: &mut R,
) -> (Vec<T>, SampleReport)
where
    T: Classified + Clone,
    R: Rng + ?Sized,
{
    if all.len() <= target {
        let shuffled = shuffle(all, rng);
        let same = same_positions(&shuffled, previous);
        let report = SampleReport {
            attempts: 1,
            same_positions: same,
            within_bound: same < MAX_SAME_POSITIONS,
        };
        return (shuffled, report);
    }

    let mut candidate = Vec::new();
    let mut same = 0;

    for attempt in 1..=MAX_SAMPLE_ATTEMPTS {
        let mut shuffled = shuffle(all, rng);
        shuffled.truncate(target);
        same = same_positions(&shuffled, previous);
        candidate = shuffled;

        if same < MAX_SAME_POSITIONS {
            debug!(attempt, same_positions = same, "accepted recycled batch");
            let report = SampleReport {
                attempts: attempt,
                same_positions: same,
                within_bound: true,
            };
            return (candidate, report);
        }
    }

    warn!(
        attempts = MAX_SAMPLE_ATTEMPTS,
        same_positions = same,
        pool = all.len(),
        target,
        "no batch avoided repetition, keeping last candidate"
    );

    let report = SampleReport {
        attempts: MAX_SAMPLE_ATTEMPTS,
        same_positions: same,
        within_bound: false,
    };
    (candidate, report)
}

/// Count indices where both batches hold the same id, up to the shorter length
pub(crate) fn same_positions<T: Classified>(candidate: &[T], previous: &[T]) -> usize {
    candidate
        .iter()
        .zip(previous)
        .filter(|(a, b)| a.id() == b.id())
        .count()
}
