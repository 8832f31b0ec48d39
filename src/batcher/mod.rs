mod cursor;
mod error;
mod pager;
mod sampler;
mod shuffle;


pub use cursor::BatchCursor;
pub use error::BatchError;
pub use pager::{Batch, BatchMode, Batcher, next_batch};
pub use sampler::{SampleReport, sample, sample_with_report};
pub use shuffle::shuffle;

/// Items per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Shuffles the sampler tries before settling for its last candidate.
/// A heuristic bound, not a tuned value.
pub const MAX_SAMPLE_ATTEMPTS: usize = 10;

/// A recycled batch is accepted once it repeats fewer than this many positions
pub const MAX_SAME_POSITIONS: usize = 2;

/// Fisher-Yates passes per shuffle
pub const SHUFFLE_PASSES: usize = 3;
