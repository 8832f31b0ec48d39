// Public API exports
pub mod batcher;
pub mod config;
pub mod fingerprint;
pub mod taxonomy;

// Re-export main types for convenience
pub use taxonomy::{Category, Classified, Item, Taxonomy, format_label, items_by_category};

pub use batcher::{
    Batch, BatchCursor, BatchError, BatchMode, Batcher, DEFAULT_PAGE_SIZE, SampleReport,
    next_batch, sample, sample_with_report, shuffle,
};

pub use config::{BatcherConfig, ConfigError, default_taxonomy, load_items};

pub use fingerprint::collection_fingerprint;
