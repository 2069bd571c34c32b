mod config;
mod fetcher;
mod window;

pub use config::{DEFAULT_PAGE_SIZE, PaginationConfig};
pub use fetcher::fetch_all_activities;
pub use window::{PageIterator, PageWindow};
