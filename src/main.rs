// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use axum::{routing::{get, post}, Router};
use tokio::sync::watch;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::reading_source::RandomReadingSource;
use crate::application::sampling_pipeline::SamplingPipeline;
use crate::infrastructure::config::load_settings;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_dashboard, get_snapshot, health_check, index, readings_csv, refresh_dashboard,
    stream_dashboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let settings = load_settings()?;
    let addr = settings.bind_addr()?;
    let sampling = &settings.sampling;

    // Sampling pipeline owns the history buffer
    let source = Arc::new(RandomReadingSource::from_settings(sampling));
    let pipeline = Arc::new(SamplingPipeline::new(
        source,
        sampling.capacity,
        sampling.interval(),
    )?);

    // Keep sampling on schedule even with no page open
    let (tx, updates) = watch::channel(pipeline.snapshot());
    tokio::spawn(pipeline.clone().drive(tx));

    // Create application state
    let state = Arc::new(AppState {
        pipeline,
        dashboard_service: DashboardService::new(sampling.interval_secs),
        updates,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/snapshot", get(get_snapshot))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/refresh", post(refresh_dashboard))
        .route("/api/stream", get(stream_dashboard))
        .route("/api/readings.csv", get(readings_csv))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    tracing::info!(
        "Starting polar-telemetry on {} (capacity {}, every {}s)",
        addr,
        sampling.capacity,
        sampling.interval_secs
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
