// Domain layer - Readings, history and derived views
pub mod comparison;
pub mod dashboard;
pub mod history;
pub mod reading;
pub mod snapshot;
pub mod telemetry;
pub mod trend;
