// Technical indicators module
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::{BollingerBands, BollingerOutput};
pub use ema::Ema;
pub use macd::{Macd, MacdOutput};
pub use rsi::Rsi;
pub use sma::Sma;

use crate::error::AnalyzerError;
use serde_json::Value;
use shared::models::{IndicatorSeries, Observation};

// Common trait for single-series indicators
pub trait IndicatorCalculator: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Parameters used for this indicator instance
    fn calculate(&self, data: &[Observation]) -> IndicatorSeries; // None where the indicator has insufficient history
}

pub(crate) fn closes(data: &[Observation]) -> Vec<f64> {
    data.iter().map(|o| o.close).collect()
}

pub(crate) fn validate_window(indicator: &str, window: usize) -> Result<(), AnalyzerError> {
    if window == 0 {
        return Err(AnalyzerError::InvalidWindow {
            indicator: indicator.to_string(),
            window,
        });
    }
    Ok(())
}
