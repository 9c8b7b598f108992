// Moving Average Convergence Divergence (MACD)
use super::ema::Ema;
use super::{closes, validate_window};
use crate::error::AnalyzerError;
use serde_json::Value;
use shared::models::{IndicatorSeries, Observation};

/// MACD line, its signal line and the histogram between them.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput {
    pub macd: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

impl Macd {
    pub fn new(fast_span: usize, slow_span: usize, signal_span: usize) -> Result<Self, AnalyzerError> {
        validate_window("MACD fast EMA", fast_span)?;
        validate_window("MACD slow EMA", slow_span)?;
        validate_window("MACD signal EMA", signal_span)?;
        Ok(Self {
            fast: Ema::with_span(fast_span),
            slow: Ema::with_span(slow_span),
            signal: Ema::with_span(signal_span),
        })
    }

    pub fn name(&self) -> String {
        format!("MACD({},{},{})", self.fast.span(), self.slow.span(), self.signal.span())
    }

    pub fn parameters(&self) -> Value {
        serde_json::json!({
            "fast_span": self.fast.span(),
            "slow_span": self.slow.span(),
            "signal_span": self.signal.span(),
        })
    }

    pub fn compute(&self, data: &[Observation]) -> MacdOutput {
        let closes = closes(data);
        let fast = self.fast.smooth(&closes);
        let slow = self.slow.smooth(&closes);
        let macd_line: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
        // Signal is seeded with macd_line[0], same recurrence.
        let signal_line = self.signal.smooth(&macd_line);
        let histogram = macd_line.iter().zip(signal_line.iter()).map(|(m, s)| Some(m - s)).collect();

        MacdOutput {
            macd: macd_line.into_iter().map(Some).collect(),
            signal: signal_line.into_iter().map(Some).collect(),
            histogram,
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast: Ema::with_span(12),
            slow: Ema::with_span(26),
            signal: Ema::with_span(9),
        }
    }
}
