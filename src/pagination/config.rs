pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Configuration for paginated store reads
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    pub page_size: usize,
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// A zero page size would never advance, so it is clamped to one
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new()
    }
}
