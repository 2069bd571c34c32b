use super::config::PaginationConfig;

/// Offset/limit window for a single page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

/// Walks offset windows until the store runs out of rows
pub struct PageIterator {
    offset: usize,
    page_size: usize,
    finished: bool,
}

impl PageIterator {
    pub fn new(config: &PaginationConfig) -> Self {
        Self {
            offset: 0,
            page_size: config.page_size.max(1),
            finished: false,
        }
    }

    pub fn current(&self) -> PageWindow {
        PageWindow {
            offset: self.offset,
            limit: self.page_size,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Record the size of the page just received. A short or empty page ends the walk.
    pub fn advance(&mut self, received: usize) {
        if received < self.page_size {
            self.finished = true;
        } else {
            self.offset += self.page_size;
        }
    }
}
