// Bollinger Bands: SMA envelope at +/- k sample standard deviations.
use super::sma::{rolling_mean, rolling_std};
use super::{closes, validate_window};
use crate::error::AnalyzerError;
use serde_json::Value;
use shared::models::{IndicatorSeries, Observation};

#[derive(Debug, Clone, PartialEq)]
pub struct BollingerOutput {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

pub struct BollingerBands {
    period: usize,
    num_std: f64,
}

impl BollingerBands {
    pub fn new(period: usize, num_std: f64) -> Result<Self, AnalyzerError> {
        validate_window("Bollinger Bands", period)?;
        Ok(Self { period, num_std })
    }

    pub fn name(&self) -> String {
        format!("BB({},{})", self.period, self.num_std)
    }

    pub fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.period, "num_std": self.num_std })
    }

    pub fn compute(&self, data: &[Observation]) -> BollingerOutput {
        let closes = closes(data);
        let middle = rolling_mean(&closes, self.period);
        let std = rolling_std(&closes, self.period);

        let band = |sign: f64| -> IndicatorSeries {
            middle
                .iter()
                .zip(std.iter())
                .map(|(m, s)| match (m, s) {
                    (Some(m), Some(s)) => Some(m + sign * self.num_std * s),
                    _ => None,
                })
                .collect()
        };
        let upper = band(1.0);
        let lower = band(-1.0);

        // Bands are only defined where both the mean and the deviation are.
        let middle = middle
            .iter()
            .zip(std.iter())
            .map(|(m, s)| s.and(*m))
            .collect();

        BollingerOutput { upper, middle, lower }
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self { period: 20, num_std: 2.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::sma::rolling_std;
    use crate::indicators::test_support::observations;

    fn sample_closes() -> Vec<f64> {
        (0..60).map(|i| 100.0 + (i as f64 * 0.45).sin() * 8.0 + i as f64 * 0.1).collect()
    }

    #[test]
    fn test_bollinger_warm_up() {
        let output = BollingerBands::default().compute(&observations(&sample_closes()));
        for i in 0..19 {
            assert_eq!(output.upper[i], None);
            assert_eq!(output.middle[i], None);
            assert_eq!(output.lower[i], None);
        }
        assert!(output.upper[19].is_some() && output.lower[19].is_some());
        assert_eq!(output.upper.len(), 60);
    }

    #[test]
    fn test_bollinger_width_is_four_std() {
        let closes = sample_closes();
        let output = BollingerBands::default().compute(&observations(&closes));
        let std = rolling_std(&closes, 20);
        for i in 19..closes.len() {
            let width = output.upper[i].unwrap() - output.lower[i].unwrap();
            assert!((width - 4.0 * std[i].unwrap()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bollinger_ordering() {
        let output = BollingerBands::default().compute(&observations(&sample_closes()));
        for i in 19..60 {
            let (u, m, l) = (output.upper[i].unwrap(), output.middle[i].unwrap(), output.lower[i].unwrap());
            assert!(u >= m && m >= l);
        }
    }

    #[test]
    fn test_bollinger_constant_series_collapses() {
        let output = BollingerBands::new(5, 2.0).unwrap().compute(&observations(&[10.0; 8]));
        for i in 4..8 {
            assert_eq!(output.upper[i], Some(10.0));
            assert_eq!(output.lower[i], Some(10.0));
        }
    }

    #[test]
    fn test_bollinger_period_one_is_undefined() {
        // Sample deviation of a single point does not exist.
        let output = BollingerBands::new(1, 2.0).unwrap().compute(&observations(&[1.0, 2.0, 3.0]));
        assert_eq!(output.upper, vec![None; 3]);
        assert_eq!(output.middle, vec![None; 3]);
    }
}
