// Reading source - where new samples come from
use crate::domain::reading::{round_tenth, Reading};
use crate::infrastructure::config::{RangeSettings, SamplingSettings};
use chrono::NaiveDateTime;
use rand::Rng;

pub trait ReadingSource: Send + Sync {
    /// Produce one reading stamped with `timestamp`.
    fn sample(&self, timestamp: NaiveDateTime) -> Reading;
}

/// Draws each region's temperature uniformly from its configured range.
#[derive(Debug, Clone)]
pub struct RandomReadingSource {
    antarctic: RangeSettings,
    arctic: RangeSettings,
}

impl RandomReadingSource {
    pub fn new(antarctic: RangeSettings, arctic: RangeSettings) -> Self {
        Self { antarctic, arctic }
    }

    pub fn from_settings(settings: &SamplingSettings) -> Self {
        Self::new(settings.antarctic, settings.arctic)
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, range: RangeSettings) -> f64 {
    round_tenth(rng.random_range(range.min..=range.max))
}

impl ReadingSource for RandomReadingSource {
    fn sample(&self, timestamp: NaiveDateTime) -> Reading {
        let mut rng = rand::rng();
        let temp_antarctic = draw(&mut rng, self.antarctic);
        let temp_arctic = draw(&mut rng, self.arctic);
        Reading::new(temp_antarctic, temp_arctic, timestamp)
    }
}
