// Dashboard service - Use case for rendering a snapshot into widgets
use crate::domain::comparison::compare;
use crate::domain::dashboard::{Dashboard, Link, Sidebar};
use crate::domain::snapshot::Snapshot;
use crate::domain::telemetry::{ChartData, ChartPoint, SeriesData, SeriesMode, TileData};
use crate::domain::trend::TrendLine;

const TEMPERATURE_UNIT: &str = "C";
const TEMPERATURE_PRECISION: usize = 1;

#[derive(Debug, Clone)]
pub struct DashboardService {
    refresh_secs: u64,
    sidebar: Sidebar,
}

impl DashboardService {
    pub fn new(refresh_secs: u64) -> Self {
        Self {
            refresh_secs,
            sidebar: default_sidebar(),
        }
    }

    pub fn render(&self, snapshot: &Snapshot) -> Dashboard {
        let latest = &snapshot.latest;

        let tiles = vec![
            TileData::new(
                "antarctic".to_string(),
                "Current Temperature (Antarctic)".to_string(),
                TEMPERATURE_UNIT.to_string(),
                latest.temp_antarctic,
                TEMPERATURE_PRECISION,
                "warmer than usual".to_string(),
            ),
            TileData::new(
                "arctic".to_string(),
                "Current Temperature (Arctic)".to_string(),
                TEMPERATURE_UNIT.to_string(),
                latest.temp_arctic,
                TEMPERATURE_PRECISION,
                "colder than usual".to_string(),
            ),
        ];

        Dashboard {
            title: "Live Data Example".to_string(),
            generation: snapshot.generation,
            refresh_secs: self.refresh_secs,
            sidebar: self.sidebar.clone(),
            tiles,
            comparison_title: "Which is Colder? Arctic vs Antarctic".to_string(),
            comparison: compare(latest),
            table_title: "Most Recent Readings".to_string(),
            table: snapshot.table.clone(),
            chart_title: "Chart with Current Trend".to_string(),
            chart: self.build_chart(snapshot),
        }
    }

    /// Antarctic readings against time, with a least-squares line fitted by index.
    fn build_chart(&self, snapshot: &Snapshot) -> ChartData {
        let timestamps = snapshot.table.timestamp_column();
        let temps = snapshot.table.antarctic_column();
        let trend = TrendLine::fit(&temps);

        let readings: Vec<ChartPoint> = timestamps
            .iter()
            .zip(&temps)
            .map(|(x, y)| ChartPoint::new(x.clone(), *y))
            .collect();

        let fitted: Vec<ChartPoint> = timestamps
            .into_iter()
            .zip(trend.fitted(temps.len()))
            .map(|(x, y)| ChartPoint::new(x, y))
            .collect();

        ChartData::new(
            "antarctic-trend".to_string(),
            "Temperature Readings with Regression Line (Antarctic)".to_string(),
            "Time".to_string(),
            "Temperature (°C)".to_string(),
            trend,
            vec![
                SeriesData::new(
                    "temp_antarctic".to_string(),
                    "temp_antarctic".to_string(),
                    Some("blue".to_string()),
                    SeriesMode::Markers,
                    readings,
                ),
                SeriesData::new(
                    "best_fit_line".to_string(),
                    "Regression Line".to_string(),
                    None,
                    SeriesMode::Lines,
                    fitted,
                ),
            ],
        )
    }
}

fn default_sidebar() -> Sidebar {
    let link = |label: &str, href: &str| Link {
        label: label.to_string(),
        href: href.to_string(),
    };

    Sidebar {
        heading: "Antarctic Explorer".to_string(),
        description: "A demonstration of real-time temperature readings in Antarctica and Arctic."
            .to_string(),
        links: vec![
            link("GitHub Source", "https://github.com/denisecase/cintel-05-cintel"),
            link("GitHub App", "https://denisecase.github.io/cintel-05-cintel/"),
            link("PyShiny", "https://shiny.posit.co/py/"),
            link("PyShiny Express", "https://shiny.posit.co/blog/posts/shiny-express/"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comparison::Region;
    use crate::domain::reading::Reading;
    use chrono::NaiveDate;

    fn reading(sec: u32, antarctic: f64, arctic: f64) -> Reading {
        let ts = NaiveDate::from_ymd_opt(2024, 12, 24)
            .unwrap()
            .and_hms_opt(18, 0, sec)
            .unwrap();
        Reading::new(antarctic, arctic, ts)
    }

    #[test]
    fn test_render_single_reading() {
        let r = reading(0, -17.0, -19.0);
        let snapshot = Snapshot::new(1, vec![r.clone()], r);
        let dashboard = DashboardService::new(3).render(&snapshot);

        assert_eq!(dashboard.generation, 1);
        assert_eq!(dashboard.tiles[0].display, "-17.0 C");
        assert_eq!(dashboard.tiles[1].display, "-19.0 C");
        assert_eq!(dashboard.comparison.colder, Region::Arctic);
        assert_eq!(dashboard.table.rows.len(), 1);

        let chart = &dashboard.chart;
        assert_eq!(chart.trend.slope, 0.0);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].points, vec![ChartPoint::new("2024-12-24 18:00:00".to_string(), -17.0)]);
        assert_eq!(chart.series[1].points[0].y, -17.0);
    }

    #[test]
    fn test_chart_series_align_with_table() {
        let readings = vec![
            reading(0, -18.0, -16.0),
            reading(3, -17.5, -16.0),
            reading(6, -17.0, -16.0),
        ];
        let latest = readings[2].clone();
        let snapshot = Snapshot::new(3, readings, latest);
        let dashboard = DashboardService::new(3).render(&snapshot);

        let chart = &dashboard.chart;
        assert!((chart.trend.slope - 0.5).abs() < 1e-9);
        for series in &chart.series {
            assert_eq!(series.points.len(), 3);
            assert_eq!(series.points[2].x, "2024-12-24 18:00:06");
        }
        assert!((chart.series[1].points[2].y - -17.0).abs() < 1e-9);
        assert_eq!(dashboard.comparison.colder, Region::Antarctic);
    }

    #[test]
    fn test_dashboard_serializes() {
        let r = reading(0, -16.4, -18.8);
        let snapshot = Snapshot::new(7, vec![r.clone()], r);
        let json = serde_json::to_value(DashboardService::new(3).render(&snapshot)).unwrap();

        assert_eq!(json["refresh_secs"], 3);
        assert_eq!(json["comparison"]["colder"], "arctic");
        assert_eq!(json["chart"]["series"][1]["mode"], "lines");
        assert_eq!(json["sidebar"]["links"].as_array().unwrap().len(), 4);
    }
}
