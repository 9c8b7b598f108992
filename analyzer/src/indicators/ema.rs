// Exponential Moving Average (EMA) indicator implementation
use super::{closes, validate_window, IndicatorCalculator};
use crate::error::AnalyzerError;
use serde_json::Value;
use shared::models::{IndicatorSeries, Observation};

pub struct Ema {
    name: String,
    span: usize,
}

impl Ema {
    pub fn new(span: usize) -> Result<Self, AnalyzerError> {
        validate_window("EMA", span)?;
        Ok(Self {
            name: format!("EMA({})", span),
            span,
        })
    }

    // Callers validate the span first.
    pub(super) fn with_span(span: usize) -> Self {
        Self {
            name: format!("EMA({})", span),
            span,
        }
    }

    pub fn span(&self) -> usize {
        self.span
    }

    /// Applies the recurrence to an arbitrary series (e.g. the MACD line).
    pub fn smooth(&self, values: &[f64]) -> Vec<f64> {
        ema_values(values, self.span)
    }
}

impl IndicatorCalculator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "span": self.span })
    }

    fn calculate(&self, data: &[Observation]) -> IndicatorSeries {
        self.smooth(&closes(data)).into_iter().map(Some).collect()
    }
}

/// EMA with smoothing factor 2/(span+1), seeded with the first value.
/// Defined at every position, so the output has no warm-up gap.
pub fn ema_values(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut results = Vec::with_capacity(values.len());
    let mut previous: Option<f64> = None;
    for &value in values {
        let ema = match previous {
            None => value,
            Some(prev) => alpha * value + (1.0 - alpha) * prev,
        };
        results.push(ema);
        previous = Some(ema);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::test_support::observations;

    #[test]
    fn test_ema_calculation() {
        // span 3 -> alpha 0.5
        // 10.0 (seed), 0.5*11 + 0.5*10 = 10.5, 0.5*12 + 0.5*10.5 = 11.25, 0.5*13 + 0.5*11.25 = 12.125
        let ema = Ema::new(3).unwrap();
        let results = ema.calculate(&observations(&[10.0, 11.0, 12.0, 13.0]));
        assert_eq!(results, vec![Some(10.0), Some(10.5), Some(11.25), Some(12.125)]);
    }

    #[test]
    fn test_ema_span_one_tracks_input() {
        let values = [4.0, 8.0, 2.0];
        assert_eq!(ema_values(&values, 1), values.to_vec());
    }

    #[test]
    fn test_ema_constant_input_stays_constant() {
        for value in ema_values(&[7.0; 10], 12) {
            assert!((value - 7.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ema_empty() {
        assert!(ema_values(&[], 12).is_empty());
    }

    #[test]
    fn test_ema_span_zero_rejected() {
        assert!(Ema::new(0).is_err());
    }
}
