// HTTP request handlers
use crate::domain::dashboard::Dashboard;
use crate::domain::snapshot::Snapshot;
use crate::infrastructure::http_response::csv_response;
use crate::infrastructure::sse::sse_from_receiver;
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page; all data arrives through the JSON and event endpoints
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Raw snapshot: buffer contents, table projection and latest reading
pub async fn get_snapshot(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    Json(state.pipeline.snapshot().as_ref().clone())
}

/// Rendered widgets for the current snapshot
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<Dashboard> {
    let snapshot = state.pipeline.snapshot();
    Json(state.dashboard_service.render(&snapshot))
}

/// Sample immediately instead of waiting for the next tick
pub async fn refresh_dashboard(State(state): State<Arc<AppState>>) -> Json<Dashboard> {
    state.pipeline.invalidate();
    let snapshot = state.pipeline.snapshot();
    Json(state.dashboard_service.render(&snapshot))
}

/// Live dashboard updates as server-sent events
pub async fn stream_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    sse_from_receiver(state.updates.clone(), state.dashboard_service.clone())
}

/// Most recent readings as CSV
pub async fn readings_csv(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.pipeline.snapshot();
    csv_response(snapshot.table.to_csv(), "readings.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::reading_source::ReadingSource;
    use crate::application::sampling_pipeline::SamplingPipeline;
    use crate::domain::reading::Reading;
    use axum::http::StatusCode;
    use chrono::NaiveDateTime;
    use std::time::Duration;
    use tokio::sync::watch;

    struct FixedSource;

    impl ReadingSource for FixedSource {
        fn sample(&self, timestamp: NaiveDateTime) -> Reading {
            Reading::new(-17.0, -17.0, timestamp)
        }
    }

    fn state() -> Arc<AppState> {
        let pipeline = Arc::new(
            SamplingPipeline::new(Arc::new(FixedSource), 5, Duration::from_secs(3)).unwrap(),
        );
        let (_tx, updates) = watch::channel(pipeline.snapshot());
        Arc::new(AppState {
            pipeline,
            dashboard_service: DashboardService::new(3),
            updates,
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "ok");
    }

    #[tokio::test]
    async fn test_index_serves_page() {
        let Html(page) = index().await;
        assert!(page.contains("/api/stream"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_handlers_share_one_snapshot_per_tick() {
        let state = state();

        let Json(snapshot) = get_snapshot(State(state.clone())).await;
        let Json(dashboard) = get_dashboard(State(state.clone())).await;

        assert_eq!(snapshot.generation, 1);
        assert_eq!(dashboard.generation, snapshot.generation);
        assert_eq!(dashboard.table, snapshot.table);
        assert_eq!(
            dashboard.comparison.message,
            "Antarctic is colder: -17.0°C vs -17.0°C"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_readings_csv() {
        let state = state();

        let response = readings_csv(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let csv = String::from_utf8(body.to_vec()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "temp_antarctic,temp_arctic,timestamp");
        assert!(lines[1].starts_with("-17.0,-17.0,"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_samples_without_waiting() {
        let state = state();

        let Json(cached) = get_dashboard(State(state.clone())).await;
        let Json(refreshed) = refresh_dashboard(State(state.clone())).await;
        let Json(after) = get_dashboard(State(state.clone())).await;

        assert_eq!(cached.generation, 1);
        assert_eq!(refreshed.generation, 2);
        assert_eq!(refreshed.table.rows.len(), 2);
        assert_eq!(after.generation, refreshed.generation);

        // Back on the regular cadence from the refresh onward
        tokio::time::advance(Duration::from_secs(3)).await;
        let Json(next) = get_dashboard(State(state)).await;
        assert_eq!(next.generation, 3);
    }
}
