// Runs every metric and indicator once over the loaded observations.
use crate::config::settings::AnalyzerSettings;
use crate::error::AnalyzerError;
use crate::indicators::{BollingerBands, BollingerOutput, IndicatorCalculator, Macd, MacdOutput, Rsi, Sma};
use crate::metrics::summary_metrics_annualized;
use shared::models::{IndicatorSeries, MetricBundle, Observation};

/// Everything derived from one observation sequence, ready for printing and plotting.
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    pub observations: &'a [Observation],
    pub metrics: MetricBundle,
    pub moving_average_name: String,
    pub moving_average: IndicatorSeries,
    pub macd: MacdOutput,
    pub rsi: IndicatorSeries,
    pub bollinger: BollingerOutput,
}

pub fn analyze<'a>(
    observations: &'a [Observation],
    settings: &AnalyzerSettings,
) -> Result<Analysis<'a>, AnalyzerError> {
    if observations.is_empty() {
        tracing::warn!("No observations to analyze");
        return Err(AnalyzerError::EmptySeries);
    }

    let sma = Sma::new(settings.ma_window)?;
    let rsi = Rsi::new(settings.rsi_window)?;
    let macd = Macd::new(settings.macd_fast_span, settings.macd_slow_span, settings.macd_signal_span)?;
    let bollinger = BollingerBands::new(settings.bollinger_window, settings.bollinger_num_std)?;

    let metrics = summary_metrics_annualized(observations, settings.trading_days_per_year)?;
    tracing::debug!(?metrics, "Computed summary metrics");

    for (name, params) in [
        (sma.name().to_string(), sma.parameters()),
        (rsi.name().to_string(), rsi.parameters()),
        (macd.name(), macd.parameters()),
        (bollinger.name(), bollinger.parameters()),
    ] {
        tracing::debug!(indicator = %name, parameters = %params, "Calculating indicator");
    }

    let longest_window = settings.ma_window.max(settings.rsi_window + 1).max(settings.bollinger_window);
    if observations.len() < longest_window {
        tracing::info!(
            rows = observations.len(),
            required = longest_window,
            "Series is shorter than some indicator windows; those positions stay undefined"
        );
    }

    let analysis = Analysis {
        observations,
        metrics,
        moving_average_name: sma.name().to_string(),
        moving_average: sma.calculate(observations),
        macd: macd.compute(observations),
        rsi: rsi.calculate(observations),
        bollinger: bollinger.compute(observations),
    };

    tracing::info!(rows = observations.len(), "Analysis complete");
    Ok(analysis)
}
