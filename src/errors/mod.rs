use thiserror::Error;

/// Failure talking to the backing activity store. This is the only error the
/// aggregation layer surfaces; everything else degrades to defaults.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("request to activity store failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("activity store responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode activity page: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("activity query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to get database connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("activity store unavailable: {0}")]
    Unavailable(String),
}

pub type DataSourceResult<T> = Result<T, DataSourceError>;
