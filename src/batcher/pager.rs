// pager.rs - fixed-size pages over a category, recycling once the tail runs short
use rand::Rng;
use tracing::debug;

use super::cursor::BatchCursor;
use super::error::BatchError;
use super::sampler::sample;
use crate::taxonomy::Classified;

/// How a batch was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Collection smaller than a page; everything is returned as-is
    Whole,
    /// A full page sliced straight out of the collection
    Sequential,
    /// The tail was short, so a fresh anti-repetition sample was drawn
    Recycled,
}

impl BatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchMode::Whole => "whole",
            BatchMode::Sequential => "sequential",
            BatchMode::Recycled => "recycled",
        }
    }
}

/// One page handed back to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T> {
    /// Items to render, in display order
    pub items: Vec<T>,
    /// Page index to pass on the next call
    pub next_page: usize,
    /// True whenever the collection holds at least one full page.
    ///
    /// This does not promise that the next page differs from this one: a
    /// collection of exactly one page keeps returning the same items.
    pub has_more: bool,
    pub mode: BatchMode,
}

/// Serves fixed-size pages from a per-category collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batcher {
    target_count: usize,
}

impl Batcher {
    pub fn try_new(target_count: usize) -> Result<Self, BatchError> {
        if target_count == 0 {
            return Err(BatchError::InvalidTargetCount(target_count));
        }
        Ok(Self { target_count })
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Produce the page at `current_page`.
    ///
    /// - Fewer items than a page: return them all, `next_page = 0`, `has_more = false`.
    /// - A full slice at `current_page * target_count`: return it, wrapping
    ///   `next_page` to 0 once the slice reaches the end.
    /// - Otherwise: draw a recycled batch with [`sample`] and restart at page 0.
    pub fn next_batch<T, R>(
        &self,
        all: &[T],
        current_page: usize,
        previous: &[T],
        rng: &mut R,
    ) -> Batch<T>
    where
        T: Classified + Clone,
        R: Rng + ?Sized,
    {
        let target = self.target_count;
        let len = all.len();

        if len < target {
            return Batch {
                items: all.to_vec(),
                next_page: 0,
                has_more: false,
                mode: BatchMode::Whole,
            };
        }

        let start = current_page.saturating_mul(target);
        let end = start.saturating_add(target);

        if end <= len {
            let next_page = if end >= len { 0 } else { current_page + 1 };
            return Batch {
                items: all[start..end].to_vec(),
                next_page,
                has_more: true,
                mode: BatchMode::Sequential,
            };
        }

        debug!(
            page = current_page,
            remaining = len.saturating_sub(start),
            target,
            "tail too short, recycling"
        );

        Batch {
            items: sample(all, previous, target, rng),
            next_page: 0,
            has_more: true,
            mode: BatchMode::Recycled,
        }
    }

    /// Load the next page for `cursor` and return it with the committed cursor.
    ///
    /// The cursor is reset first if `all` is not the collection it was last
    /// advanced against. Replace the old cursor with the returned one before
    /// calling again.
    pub fn advance<T, R>(
        &self,
        mut cursor: BatchCursor<T>,
        all: &[T],
        rng: &mut R,
    ) -> (Batch<T>, BatchCursor<T>)
    where
        T: Classified + Clone,
        R: Rng + ?Sized,
    {
        cursor.sync(all);
        let batch = self.next_batch(all, cursor.current_page(), cursor.previous_batch(), rng);
        let cursor = cursor.commit(&batch);
        (batch, cursor)
    }
}

/// Free-function form of [`Batcher::next_batch`] that validates `target_count`
pub fn next_batch<T, R>(
    all: &[T],
    current_page: usize,
    target_count: usize,
    previous: &[T],
    rng: &mut R,
) -> Result<Batch<T>, BatchError>
where
    T: Classified + Clone,
    R: Rng + ?Sized,
{
    let batcher = Batcher::try_new(target_count)?;
    Ok(batcher.next_batch(all, current_page, previous, rng))
}
