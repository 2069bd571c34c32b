use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, data_source_failure};
use crate::store::ActivityStore;

pub async fn get_total<S: ActivityStore>(State(state): State<Arc<AppState<S>>>) -> impl IntoResponse {
    match state.aggregator.team_progress().await {
        Ok(progress) => Json(progress).into_response(),
        Err(e) => data_source_failure(e),
    }
}

pub async fn get_monthly<S: ActivityStore>(State(state): State<Arc<AppState<S>>>) -> impl IntoResponse {
    let goal = state.aggregator.team_goal_km();

    match state.aggregator.monthly_series(goal).await {
        Ok(points) => Json(points).into_response(),
        Err(e) => data_source_failure(e),
    }
}

pub async fn get_shirts<S: ActivityStore>(State(state): State<Arc<AppState<S>>>) -> impl IntoResponse {
    match state.aggregator.shirts().await {
        Ok(shirts) => Json(shirts).into_response(),
        Err(e) => data_source_failure(e),
    }
}

pub async fn get_dashboard<S: ActivityStore>(
    State(state): State<Arc<AppState<S>>>,
) -> impl IntoResponse {
    match state.aggregator.dashboard().await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => data_source_failure(e),
    }
}
