// Analyzer settings: the fixed indicator defaults plus chart geometry.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnalyzerSettings {
    pub ma_window: usize,
    pub rsi_window: usize,
    pub bollinger_window: usize,
    pub bollinger_num_std: f64,
    pub macd_fast_span: usize,
    pub macd_slow_span: usize,
    pub macd_signal_span: usize,
    pub trading_days_per_year: f64,
    pub chart: ChartSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartSettings {
    pub width: usize,
    pub panel_height: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        AnalyzerSettings {
            ma_window: 3,
            rsi_window: 14,
            bollinger_window: 20,
            bollinger_num_std: 2.0,
            macd_fast_span: 12,
            macd_slow_span: 26,
            macd_signal_span: 9,
            trading_days_per_year: 252.0,
            chart: ChartSettings::default(),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        ChartSettings {
            width: 72,
            panel_height: 12,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
        }
    }
}

impl AnalyzerSettings {
    /// Defaults with the moving-average window taken from the command line.
    pub fn with_ma_window(window: usize) -> Self {
        AnalyzerSettings {
            ma_window: window,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AnalyzerSettings::default();
        assert_eq!(settings.ma_window, 3);
        assert_eq!(settings.rsi_window, 14);
        assert_eq!(settings.bollinger_window, 20);
        assert_eq!(settings.trading_days_per_year, 252.0);
        assert_eq!((settings.macd_fast_span, settings.macd_slow_span, settings.macd_signal_span), (12, 26, 9));
        assert_eq!(settings.chart.rsi_overbought, 70.0);
        assert_eq!(settings.chart.rsi_oversold, 30.0);
    }

    #[test]
    fn test_with_ma_window_keeps_other_defaults() {
        let settings = AnalyzerSettings::with_ma_window(10);
        assert_eq!(settings.ma_window, 10);
        assert_eq!(settings.rsi_window, 14);
    }
}
