// Snapshot domain model - point-in-time view of the history
use super::reading::Reading;
use serde::Serialize;
use std::fmt::Write;

pub const TABLE_COLUMNS: [&str; 3] = ["temp_antarctic", "temp_arctic", "timestamp"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub temp_antarctic: f64,
    pub temp_arctic: f64,
    pub timestamp: String,
}

/// Tabular projection of the history, one row per reading in buffer order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingTable {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl ReadingTable {
    pub fn from_readings(readings: &[Reading]) -> Self {
        let rows = readings
            .iter()
            .map(|r| TableRow {
                temp_antarctic: r.temp_antarctic,
                temp_arctic: r.temp_arctic,
                timestamp: r.formatted_timestamp(),
            })
            .collect();

        Self {
            columns: TABLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    pub fn antarctic_column(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.temp_antarctic).collect()
    }

    pub fn timestamp_column(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.timestamp.clone()).collect()
    }

    pub fn to_csv(&self) -> String {
        let mut out = self.columns.join(",");
        out.push('\n');
        for row in &self.rows {
            // Infallible for String
            let _ = writeln!(
                out,
                "{:.1},{:.1},{}",
                row.temp_antarctic, row.temp_arctic, row.timestamp
            );
        }
        out
    }
}

/// Everything a renderer needs from one recomputation of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub generation: u64,
    pub readings: Vec<Reading>,
    pub table: ReadingTable,
    pub latest: Reading,
}

impl Snapshot {
    pub fn new(generation: u64, readings: Vec<Reading>, latest: Reading) -> Self {
        let table = ReadingTable::from_readings(&readings);
        Self {
            generation,
            readings,
            table,
            latest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reading(sec: u32, antarctic: f64, arctic: f64) -> Reading {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, sec)
            .unwrap();
        Reading::new(antarctic, arctic, ts)
    }

    #[test]
    fn test_table_projection_matches_readings() {
        let readings = vec![reading(0, -17.0, -19.2), reading(3, -16.5, -15.0)];
        let snapshot = Snapshot::new(2, readings.clone(), readings[1].clone());

        assert_eq!(snapshot.table.columns, TABLE_COLUMNS);
        assert_eq!(snapshot.table.rows.len(), 2);
        assert_eq!(snapshot.table.rows[0].timestamp, "2024-06-01 08:00:00");
        assert_eq!(snapshot.table.antarctic_column(), vec![-17.0, -16.5]);
        assert_eq!(snapshot.latest, readings[1]);
    }

    #[test]
    fn test_csv_output() {
        let table = ReadingTable::from_readings(&[reading(9, -17.0, -19.24)]);
        assert_eq!(
            table.to_csv(),
            "temp_antarctic,temp_arctic,timestamp\n-17.0,-19.2,2024-06-01 08:00:09\n"
        );
    }

    #[test]
    fn test_empty_table() {
        let table = ReadingTable::from_readings(&[]);
        assert!(table.rows.is_empty());
        assert_eq!(table.to_csv(), "temp_antarctic,temp_arctic,timestamp\n");
    }
}
