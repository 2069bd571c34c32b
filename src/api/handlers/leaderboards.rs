use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, data_source_failure};
use crate::aggregation::Board;
use crate::api::models::ErrorResponse;
use crate::store::ActivityStore;

pub async fn get_leaderboard<S: ActivityStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let board = match slug.parse::<Board>() {
        Ok(board) => board,
        Err(message) => return (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message))).into_response(),
    };

    match state.aggregator.board(board).await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => data_source_failure(e),
    }
}

pub async fn get_goals<S: ActivityStore>(State(state): State<Arc<AppState<S>>>) -> impl IntoResponse {
    match state.aggregator.goal_annotated_walk_run_leaderboard().await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => data_source_failure(e),
    }
}
