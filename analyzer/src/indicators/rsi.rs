// Relative Strength Index (RSI) indicator implementation
use super::{closes, validate_window, IndicatorCalculator};
use crate::error::AnalyzerError;
use serde_json::Value;
use shared::models::{IndicatorSeries, Observation};

pub struct Rsi {
    name: String,
    period: usize,
}

impl Rsi {
    pub fn new(period: usize) -> Result<Self, AnalyzerError> {
        validate_window("RSI", period)?;
        Ok(Self {
            name: format!("RSI({})", period),
            period,
        })
    }
}

impl IndicatorCalculator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.period })
    }

    fn calculate(&self, data: &[Observation]) -> IndicatorSeries {
        rsi_values(&closes(data), self.period)
    }
}

/// RSI from simple rolling means of gains and losses.
///
/// Position `i` averages the `period` price changes ending at `i`, so the first
/// defined value is at index `period`. A window with neither gains nor losses
/// has no defined RSI and yields `None`.
pub fn rsi_values(values: &[f64], period: usize) -> IndicatorSeries {
    if period == 0 || values.len() <= period {
        return vec![None; values.len()];
    }

    // deltas[j] is the change from values[j] to values[j + 1]
    let deltas: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();

    let mut results = vec![None; period]; // RSI needs 'period' initial changes
    for window in deltas.windows(period) {
        let gains: f64 = window.iter().map(|d| d.max(0.0)).sum();
        let losses: f64 = window.iter().map(|d| (-d).max(0.0)).sum();
        let avg_gain = gains / period as f64;
        let avg_loss = losses / period as f64;
        results.push(rsi_from_averages(avg_gain, avg_loss));
    }
    results
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    match (avg_gain > 0.0, avg_loss > 0.0) {
        (false, false) => None, // 0/0: flat window
        (true, false) => Some(100.0),
        (false, true) => Some(0.0),
        (true, true) => {
            let rs = avg_gain / avg_loss;
            Some(100.0 - (100.0 / (1.0 + rs)))
        }
    }
}
