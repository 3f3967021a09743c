// Which region is colder
use super::reading::Reading;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Antarctic,
    Arctic,
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Region::Antarctic => "Antarctic",
            Region::Arctic => "Arctic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub colder: Region,
    pub message: String,
}

/// Compare the latest temperatures. Equal readings report the Antarctic as colder.
pub fn compare(reading: &Reading) -> Comparison {
    let (colder, colder_temp, other_temp) = if reading.temp_arctic < reading.temp_antarctic {
        (Region::Arctic, reading.temp_arctic, reading.temp_antarctic)
    } else {
        (Region::Antarctic, reading.temp_antarctic, reading.temp_arctic)
    };

    Comparison {
        colder,
        message: format!(
            "{} is colder: {:.1}°C vs {:.1}°C",
            colder.label(),
            colder_temp,
            other_temp
        ),
    }
}
