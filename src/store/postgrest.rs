use anyhow::Result;
use log::debug;
use urlencoding::encode;

use super::ActivityStore;
use crate::config::settings::StoreSettings;
use crate::domain::{ActivityRecord, FilterSpec, RawActivityRow};
use crate::errors::{DataSourceError, DataSourceResult};
use crate::http::StoreClient;
use crate::pagination::PageWindow;

const SELECT_COLUMNS: &str =
    "athlete_id,type,distance_in_k,total_elevation_gain,moving_time,start_date";

/// Activity table exposed through a PostgREST (Supabase) endpoint
pub struct PostgrestStore {
    client: StoreClient,
    table_url: String,
    order_column: Option<String>,
}

impl PostgrestStore {
    pub fn new(settings: &StoreSettings) -> Result<Self> {
        let client = StoreClient::new(
            &settings.user_agent,
            settings.timeout_secs,
            settings.api_key.as_deref(),
        )?;

        Ok(Self {
            client,
            table_url: build_table_url(&settings.url, &settings.table),
            order_column: settings
                .order_column
                .clone()
                .filter(|column| !column.trim().is_empty()),
        })
    }

    fn build_page_url(&self, filter: &FilterSpec, window: PageWindow) -> String {
        let mut params = vec![format!("select={}", SELECT_COLUMNS)];
        params.extend(filter_params(filter));

        if let Some(column) = &self.order_column {
            params.push(format!("order={}.asc", encode(column)));
        }
        params.push(format!("offset={}", window.offset));
        params.push(format!("limit={}", window.limit));

        format!("{}?{}", self.table_url, params.join("&"))
    }
}

impl ActivityStore for PostgrestStore {
    async fn fetch_page(
        &self,
        filter: &FilterSpec,
        window: PageWindow,
    ) -> DataSourceResult<Vec<ActivityRecord>> {
        let url = self.build_page_url(filter, window);
        debug!("GET {}", url);

        let response = self.client.get(&url).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DataSourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_rows(&body)
    }
}

fn build_table_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), encode(table))
}

fn filter_params(filter: &FilterSpec) -> Vec<String> {
    let mut params = Vec::new();

    if !filter.types.is_empty() {
        let quoted: Vec<String> = filter
            .types
            .iter()
            .map(|t| encode(&format!("\"{}\"", t)).into_owned())
            .collect();
        params.push(format!("type=in.({})", quoted.join(",")));
    }
    if let Some(min) = filter.min_moving_time {
        params.push(format!("moving_time=gte.{}", min));
    }
    if let Some(start) = filter.start_date {
        params.push(format!("start_date=gte.{}", start.format("%Y-%m-%d")));
    }
    if let Some(end) = filter.end_date {
        params.push(format!("start_date=lt.{}", end.format("%Y-%m-%d")));
    }

    params
}

fn parse_rows(body: &str) -> DataSourceResult<Vec<ActivityRecord>> {
    let rows: Vec<RawActivityRow> = serde_json::from_str(body)?;
    Ok(rows.into_iter().map(RawActivityRow::into_record).collect())
}
