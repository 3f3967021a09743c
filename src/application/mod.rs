// Application layer - Sampling and dashboard use cases
pub mod dashboard_service;
pub mod reading_source;
pub mod sampling_pipeline;
