use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::types::Value;

use super::ActivityStore;
use crate::domain::parsing::parse_metric_text;
use crate::domain::{ActivityRecord, FilterSpec};
use crate::errors::DataSourceResult;
use crate::pagination::PageWindow;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;

/// Read-only view over a local `activities` table with the same columns as the
/// hosted store. Schema creation belongs to whatever syncs the activities.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(database_path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(database_path);
        let pool = build_pool(manager)?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool> {
    r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create database connection pool")
}

impl ActivityStore for SqliteStore {
    async fn fetch_page(
        &self,
        filter: &FilterSpec,
        window: PageWindow,
    ) -> DataSourceResult<Vec<ActivityRecord>> {
        let conn = self.pool.get()?;
        let (sql, params) = build_page_query(filter, window);

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(rusqlite::params_from_iter(params), parse_activity_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }
}

fn build_page_query(filter: &FilterSpec, window: PageWindow) -> (String, Vec<Value>) {
    let mut clauses = Vec::new();
    let mut params = Vec::new();

    if !filter.types.is_empty() {
        let placeholders = vec!["?"; filter.types.len()].join(", ");
        clauses.push(format!("type IN ({})", placeholders));
        params.extend(filter.types.iter().cloned().map(Value::Text));
    }
    if let Some(min) = filter.min_moving_time {
        clauses.push("moving_time >= ?".to_string());
        params.push(Value::Integer(min));
    }
    if let Some(start) = filter.start_date {
        clauses.push("start_date >= ?".to_string());
        params.push(Value::Text(start.format("%Y-%m-%d").to_string()));
    }
    if let Some(end) = filter.end_date {
        clauses.push("start_date < ?".to_string());
        params.push(Value::Text(end.format("%Y-%m-%d").to_string()));
    }

    let where_clause = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };

    let sql = format!(
        "SELECT athlete_id, type, distance_in_k, total_elevation_gain, moving_time, start_date FROM activities{} ORDER BY id LIMIT ? OFFSET ?",
        where_clause
    );
    params.push(Value::Integer(window.limit as i64));
    params.push(Value::Integer(window.offset as i64));

    (sql, params)
}

fn parse_activity_row(row: &rusqlite::Row) -> rusqlite::Result<ActivityRecord> {
    Ok(ActivityRecord {
        athlete_id: row.get(0)?,
        activity_type: row.get(1)?,
        distance_km: metric_from_column(row.get(2)?),
        elevation_gain_m: metric_from_column(row.get(3)?),
        moving_time_seconds: metric_from_column(row.get(4)?) as i64,
        start_date: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}

/// SQLite columns are dynamically typed, so numbers may come back as text
fn metric_from_column(value: Value) -> f64 {
    match value {
        Value::Integer(i) => i as f64,
        Value::Real(r) if r.is_finite() => r,
        Value::Text(text) => parse_metric_text(&text),
        _ => 0.0,
    }
}
