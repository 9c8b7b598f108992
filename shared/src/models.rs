use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading-day row of the input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: f64,
}

/// Derived series aligned index-for-index with the observations.
/// `None` marks positions without enough history (or mathematically undefined values).
pub type IndicatorSeries = Vec<Option<f64>>;

/// Scalar summary of a whole observation sequence.
///
/// `None` means the metric is structurally undefined for the input (e.g. the
/// standard deviation of a single point). Degenerate arithmetic such as a
/// Sharpe ratio over zero-volatility returns is kept as a non-finite value
/// inside `Some`, so it stays distinguishable from "not enough data".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBundle {
    pub observations: usize,
    pub mean_close: f64,
    pub std_dev_close: Option<f64>,
    pub total_volume: f64,
    pub volatility: Option<f64>,
    pub sharpe_ratio: Option<f64>,
    pub max_drawdown: f64,
}
