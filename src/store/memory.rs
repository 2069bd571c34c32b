use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{ActivityRecord, FilterSpec};
use crate::errors::{DataSourceError, DataSourceResult};
use crate::pagination::PageWindow;

use super::ActivityStore;

/// Activity store backed by a vector, filtering with `FilterSpec::matches`.
/// Counts page requests and can be told to fail at a given offset.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<ActivityRecord>,
    fail_at_offset: Option<usize>,
    requests: AtomicUsize,
}

impl MemoryStore {
    pub fn new(records: Vec<ActivityRecord>) -> Self {
        Self {
            records,
            fail_at_offset: None,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn failing_at_offset(mut self, offset: usize) -> Self {
        self.fail_at_offset = Some(offset);
        self
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl ActivityStore for MemoryStore {
    async fn fetch_page(
        &self,
        filter: &FilterSpec,
        window: PageWindow,
    ) -> DataSourceResult<Vec<ActivityRecord>> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        if self.fail_at_offset == Some(window.offset) {
            return Err(DataSourceError::Unavailable(format!(
                "injected failure at offset {}",
                window.offset
            )));
        }

        Ok(self
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .skip(window.offset)
            .take(window.limit)
            .cloned()
            .collect())
    }
}
