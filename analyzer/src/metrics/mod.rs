// Scalar summary metrics over the whole observation sequence.
use crate::error::AnalyzerError;
use shared::models::{IndicatorSeries, MetricBundle, Observation};
use shared::utils::{mean, sample_std_dev};

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// `close[i] / close[i-1] - 1`, undefined at index 0.
pub fn daily_returns(data: &[Observation]) -> IndicatorSeries {
    let mut results = Vec::with_capacity(data.len());
    if !data.is_empty() {
        results.push(None);
    }
    results.extend(data.windows(2).map(|w| Some(w[1].close / w[0].close - 1.0)));
    results
}

/// Largest relative decline from the running peak, as a fraction (<= 0).
pub fn max_drawdown(data: &[Observation]) -> Option<f64> {
    let mut peak = f64::NEG_INFINITY;
    data.iter()
        .map(|o| {
            peak = peak.max(o.close);
            o.close / peak - 1.0
        })
        .reduce(f64::min)
}

pub fn summary_metrics(data: &[Observation]) -> Result<MetricBundle, AnalyzerError> {
    summary_metrics_annualized(data, TRADING_DAYS_PER_YEAR)
}

pub fn summary_metrics_annualized(
    data: &[Observation],
    trading_days_per_year: f64,
) -> Result<MetricBundle, AnalyzerError> {
    let closes: Vec<f64> = data.iter().map(|o| o.close).collect();
    let mean_close = mean(&closes).ok_or(AnalyzerError::EmptySeries)?;
    let max_drawdown = max_drawdown(data).ok_or(AnalyzerError::EmptySeries)?;

    let returns: Vec<f64> = daily_returns(data).into_iter().flatten().collect();
    let annualization = trading_days_per_year.sqrt();
    let returns_std = sample_std_dev(&returns);
    let volatility = returns_std.map(|std| std * annualization);
    // Zero volatility yields NaN (0/0) or +/-inf; reported as-is.
    let sharpe_ratio = returns_std
        .zip(mean(&returns))
        .map(|(std, avg)| avg / std * annualization);

    if matches!(sharpe_ratio, Some(s) if !s.is_finite()) {
        tracing::warn!("Daily returns have zero volatility; Sharpe ratio is not finite");
    }

    Ok(MetricBundle {
        observations: data.len(),
        mean_close,
        std_dev_close: sample_std_dev(&closes),
        total_volume: data.iter().map(|o| o.volume).sum(),
        volatility,
        sharpe_ratio,
        max_drawdown,
    })
}
