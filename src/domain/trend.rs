// Trend line - least-squares fit of a series against its index
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation; `None` when either variable has zero variance.
    pub r_value: Option<f64>,
}

impl TrendLine {
    /// Fit `y = slope * i + intercept` where `i` is the position in `values`.
    ///
    /// Fewer than two points, or a constant series, falls back to a flat line
    /// through the mean (0 for an empty series).
    pub fn fit(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::flat(0.0);
        }

        let n = values.len() as f64;
        let mean_x = (n - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n;

        let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
        for (i, y) in values.iter().enumerate() {
            let dx = i as f64 - mean_x;
            let dy = y - mean_y;
            sxy += dx * dy;
            sxx += dx * dx;
            syy += dy * dy;
        }

        if sxx == 0.0 {
            return Self::flat(mean_y);
        }

        let slope = sxy / sxx;
        let r_value = if syy > 0.0 {
            Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
        } else {
            None
        };

        Self {
            slope,
            intercept: mean_y - slope * mean_x,
            r_value,
        }
    }

    fn flat(level: f64) -> Self {
        Self {
            slope: 0.0,
            intercept: level,
            r_value: None,
        }
    }

    pub fn value_at(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }

    /// Fitted values for indices `0..len`.
    pub fn fitted(&self, len: usize) -> Vec<f64> {
        (0..len).map(|i| self.value_at(i)).collect()
    }
}
