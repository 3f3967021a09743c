// Dashboard domain model
use super::comparison::Comparison;
use super::snapshot::ReadingTable;
use super::telemetry::{ChartData, TileData};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sidebar {
    pub heading: String,
    pub description: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub generation: u64,
    pub refresh_secs: u64,
    pub sidebar: Sidebar,
    pub tiles: Vec<TileData>,
    pub comparison_title: String,
    pub comparison: Comparison,
    pub table_title: String,
    pub table: ReadingTable,
    pub chart_title: String,
    pub chart: ChartData,
}
