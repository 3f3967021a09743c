// Reading domain model
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One synthetic sample: a temperature per region and the time it was taken.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub temp_antarctic: f64,
    pub temp_arctic: f64,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
}

impl Reading {
    pub fn new(temp_antarctic: f64, temp_arctic: f64, timestamp: NaiveDateTime) -> Self {
        Self {
            temp_antarctic,
            temp_arctic,
            timestamp,
        }
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
}

/// Round to one decimal place, the precision every reading is stored at.
/// Exact halves go to the even tenth.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
