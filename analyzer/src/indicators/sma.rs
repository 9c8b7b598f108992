// Simple Moving Average (SMA) indicator implementation
use super::{closes, validate_window, IndicatorCalculator};
use crate::error::AnalyzerError;
use serde_json::Value;
use shared::models::{IndicatorSeries, Observation};
use shared::utils::{mean, sample_std_dev};

pub struct Sma {
    name: String,
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Result<Self, AnalyzerError> {
        validate_window("SMA", period)?;
        Ok(Self {
            name: format!("SMA({})", period),
            period,
        })
    }
}

impl IndicatorCalculator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.period })
    }

    fn calculate(&self, data: &[Observation]) -> IndicatorSeries {
        rolling_mean(&closes(data), self.period)
    }
}

/// Mean of each trailing window, aligned with `values`.
pub fn rolling_mean(values: &[f64], window: usize) -> IndicatorSeries {
    rolling(values, window, mean)
}

/// Sample standard deviation (n-1) of each trailing window, aligned with `values`.
pub fn rolling_std(values: &[f64], window: usize) -> IndicatorSeries {
    rolling(values, window, sample_std_dev)
}

fn rolling(values: &[f64], window: usize, stat: fn(&[f64]) -> Option<f64>) -> IndicatorSeries {
    if window == 0 || values.len() < window {
        return vec![None; values.len()];
    }
    let mut results = vec![None; window - 1]; // No value for the initial period
    results.extend(values.windows(window).map(stat));
    results
}
