// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::sampling_pipeline::SamplingPipeline;
use crate::domain::snapshot::Snapshot;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SamplingPipeline>,
    pub dashboard_service: DashboardService,
    pub updates: watch::Receiver<Arc<Snapshot>>,
}
