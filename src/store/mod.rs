pub mod memory;
pub mod postgrest;
pub mod sqlite;

use std::future::Future;

use crate::config::settings::{StoreBackend, StoreSettings};
use crate::domain::{ActivityRecord, FilterSpec};
use crate::errors::DataSourceResult;
use crate::pagination::PageWindow;

pub use memory::MemoryStore;
pub use postgrest::PostgrestStore;
pub use sqlite::SqliteStore;

/// Read-only source of activity records, queried one window at a time
pub trait ActivityStore: Send + Sync {
    fn fetch_page(
        &self,
        filter: &FilterSpec,
        window: PageWindow,
    ) -> impl Future<Output = DataSourceResult<Vec<ActivityRecord>>> + Send;
}

/// Store selected by configuration
pub enum Store {
    Postgrest(PostgrestStore),
    Sqlite(SqliteStore),
}

impl Store {
    pub fn from_settings(settings: &StoreSettings) -> anyhow::Result<Self> {
        match settings.backend {
            StoreBackend::Postgrest => Ok(Store::Postgrest(PostgrestStore::new(settings)?)),
            StoreBackend::Sqlite => Ok(Store::Sqlite(SqliteStore::open(&settings.database_path)?)),
        }
    }
}

impl ActivityStore for Store {
    async fn fetch_page(
        &self,
        filter: &FilterSpec,
        window: PageWindow,
    ) -> DataSourceResult<Vec<ActivityRecord>> {
        match self {
            Store::Postgrest(store) => store.fetch_page(filter, window).await,
            Store::Sqlite(store) => store.fetch_page(filter, window).await,
        }
    }
}
