use log::{debug, warn};

use super::config::PaginationConfig;
use super::window::PageIterator;
use crate::domain::{ActivityRecord, FilterSpec};
use crate::errors::DataSourceResult;
use crate::store::ActivityStore;

/// Fetch every record matching `filter`, paging through the store until it runs dry.
/// A failed page aborts the whole fetch; rows gathered so far are dropped.
pub async fn fetch_all_activities<S>(
    store: &S,
    filter: &FilterSpec,
    config: &PaginationConfig,
) -> DataSourceResult<Vec<ActivityRecord>>
where
    S: ActivityStore,
{
    let mut pages = PageIterator::new(config);
    let mut activities = Vec::new();

    while !pages.is_finished() {
        let window = pages.current();
        let page = match store.fetch_page(filter, window).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Activity page at offset {} failed: {}", window.offset, e);
                return Err(e);
            }
        };

        debug!(
            "Fetched {} activities at offset {} (limit {})",
            page.len(),
            window.offset,
            window.limit
        );

        pages.advance(page.len());
        activities.extend(page);
    }

    debug!("Fetched {} activities in total", activities.len());
    Ok(activities)
}
