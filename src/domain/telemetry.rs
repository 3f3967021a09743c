// Telemetry widget models
use super::trend::TrendLine;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: f64,
}

impl ChartPoint {
    pub fn new(x: String, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileData {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub value: f64,
    pub precision: usize,
    pub caption: String,
    pub display: String,
}

impl TileData {
    pub fn new(
        id: String,
        title: String,
        unit: String,
        value: f64,
        precision: usize,
        caption: String,
    ) -> Self {
        let display = format!("{:.*} {}", precision, value, unit);
        Self {
            id,
            title,
            unit,
            value,
            precision,
            caption,
            display,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesMode {
    Markers,
    Lines,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub mode: SeriesMode,
    pub points: Vec<ChartPoint>,
}

impl SeriesData {
    pub fn new(
        id: String,
        name: String,
        color: Option<String>,
        mode: SeriesMode,
        points: Vec<ChartPoint>,
    ) -> Self {
        Self {
            id,
            name,
            color,
            mode,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub trend: TrendLine,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    pub fn new(
        id: String,
        title: String,
        x_label: String,
        y_label: String,
        trend: TrendLine,
        series: Vec<SeriesData>,
    ) -> Self {
        Self {
            id,
            title,
            x_label,
            y_label,
            trend,
            series,
        }
    }
}
