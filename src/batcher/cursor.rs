use tracing::debug;

use super::pager::Batch;
use crate::fingerprint::collection_fingerprint;
use crate::taxonomy::Classified;

/// Caller-owned paging state for one gallery widget
#[derive(Debug, Clone, PartialEq)]
pub struct BatchCursor<T> {
    current_page: usize,
    previous_batch: Vec<T>,
    /// Identity of the collection this cursor was last advanced against
    fingerprint: Option<String>,
}

impl<T> BatchCursor<T> {
    pub fn new() -> Self {
        Self {
            current_page: 0,
            previous_batch: Vec::new(),
            fingerprint: None,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The batch rendered last time, used to steer recycling away from repeats
    pub fn previous_batch(&self) -> &[T] {
        &self.previous_batch
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Back to page 0 with nothing shown (e.g., the viewed category changed)
    pub fn reset(&mut self) {
        self.current_page = 0;
        self.previous_batch.clear();
        self.fingerprint = None;
    }

    pub fn is_fresh(&self) -> bool {
        self.current_page == 0 && self.previous_batch.is_empty()
    }
}

impl<T: Classified + Clone> BatchCursor<T> {
    /// Reset if `items` differs from the collection this cursor last saw.
    ///
    /// Returns true when paging state was discarded.
    pub fn sync(&mut self, items: &[T]) -> bool {
        let fingerprint = collection_fingerprint(items);
        if self.fingerprint.as_deref() == Some(fingerprint.as_str()) {
            return false;
        }

        let discarded = self.fingerprint.is_some();
        if discarded {
            debug!(page = self.current_page, "collection changed, resetting cursor");
        }
        self.reset();
        self.fingerprint = Some(fingerprint);
        discarded
    }

    /// Cursor state after `batch` has been rendered
    pub(crate) fn commit(mut self, batch: &Batch<T>) -> Self {
        self.current_page = batch.next_page;
        self.previous_batch = batch.items.clone();
        self
    }
}

impl<T> Default for BatchCursor<T> {
    fn default() -> Self {
        Self::new()
    }
}
