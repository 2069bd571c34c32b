use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::aggregation::Aggregator;
use crate::api::models::ErrorResponse;
use crate::errors::DataSourceError;

pub mod dashboard;
pub mod leaderboards;

pub struct AppState<S> {
    pub aggregator: Aggregator<S>,
}

impl<S> AppState<S> {
    pub fn new(aggregator: Aggregator<S>) -> Self {
        Self { aggregator }
    }
}

/// Store failures surface as 502 with a JSON error body
pub(crate) fn data_source_failure(e: DataSourceError) -> Response {
    log::error!("Activity store query failed: {}", e);
    (StatusCode::BAD_GATEWAY, Json(ErrorResponse::new(e.to_string()))).into_response()
}
