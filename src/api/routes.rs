use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    dashboard::{get_dashboard, get_monthly, get_shirts, get_total},
    leaderboards::{get_goals, get_leaderboard},
};
use crate::store::ActivityStore;

pub fn create_router<S: ActivityStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/api/total", get(get_total::<S>))
        .route("/api/monthly", get(get_monthly::<S>))
        .route("/api/leaderboards/:board", get(get_leaderboard::<S>))
        .route("/api/goals", get(get_goals::<S>))
        .route("/api/shirts", get(get_shirts::<S>))
        .route("/api/dashboard", get(get_dashboard::<S>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::aggregation::Aggregator;
    use crate::config::settings::ChallengeSettings;
    use crate::config::{AthleteDirectory, GoalDirectory};
    use crate::domain::ActivityRecord;
    use crate::store::MemoryStore;

    fn run(athlete_id: i64, distance_km: f64) -> ActivityRecord {
        ActivityRecord {
            athlete_id,
            activity_type: "Run".to_string(),
            distance_km,
            elevation_gain_m: 12.0,
            moving_time_seconds: 2000,
            start_date: "2026-02-14T09:00:00Z".to_string(),
        }
    }

    fn router(store: MemoryStore) -> Router {
        let aggregator = Aggregator::from_parts(
            store,
            AthleteDirectory::new([(1, "Eirik".to_string()), (2, "Silje".to_string())]),
            GoalDirectory::new([("Eirik", 650.0)]),
            &ChallengeSettings::default(),
        );
        create_router(Arc::new(AppState::new(aggregator)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_leaderboard_endpoint() {
        let app = router(MemoryStore::new(vec![run(1, 10.0), run(2, 20.0), run(1, 5.0)]));

        let (status, body) = get_json(app, "/api/leaderboards/walk-run").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"name": "Silje", "value": 20.0}, {"name": "Eirik", "value": 15.0}])
        );
    }

    #[tokio::test]
    async fn test_unknown_board_is_not_found() {
        let (status, body) = get_json(router(MemoryStore::default()), "/api/leaderboards/chess").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("chess"));
    }

    #[tokio::test]
    async fn test_empty_data_is_success() {
        let (status, body) = get_json(router(MemoryStore::default()), "/api/leaderboards/bike").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_store_failure_is_bad_gateway() {
        let store = MemoryStore::default().failing_at_offset(0);
        let (status, body) = get_json(router(store), "/api/total").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_monthly_shape() {
        let app = router(MemoryStore::new(vec![run(1, 10.0)]));
        let (status, body) = get_json(app.clone(), "/api/monthly").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 12);
        assert_eq!(body[1], json!({"month": "Feb", "actual": 10.0, "target": 1083.33}));

        let (status, dashboard) = get_json(app, "/api/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dashboard["monthly"], body);
    }

    #[tokio::test]
    async fn test_goals_endpoint() {
        let (_, body) = get_json(router(MemoryStore::new(vec![run(1, 65.0)])), "/api/goals").await;

        assert_eq!(body[0]["goal"], json!(650.0));
        assert_eq!(body[0]["percentage"], json!(10.0));
        assert_eq!(body[0]["progressTier"], json!("low"));
    }

    #[tokio::test]
    async fn test_total_and_shirts() {
        let app = router(MemoryStore::new(vec![run(1, 10.0)]));

        let (_, total) = get_json(app.clone(), "/api/total").await;
        assert_eq!(total["totalKm"], json!(10.0));
        assert_eq!(total["goalKm"], json!(6500.0));

        let (_, shirts) = get_json(app, "/api/shirts").await;
        assert_eq!(shirts["distance"]["leader"]["name"], json!("Eirik"));
        assert_eq!(shirts["distance"]["runnerUp"], Value::Null);
    }
}
