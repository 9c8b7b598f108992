// Printed metric report
use shared::models::MetricBundle;
use std::fmt::Write;

pub const UNDEFINED: &str = "undefined";

pub fn format_report(metrics: &MetricBundle) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Financial Data Analysis");
    let _ = writeln!(out, "------------------------");
    let _ = writeln!(out, "Mean Close Price: {:.2}", metrics.mean_close);
    let _ = writeln!(out, "Standard Deviation of Close Price: {}", format_decimal(metrics.std_dev_close));
    let _ = writeln!(out, "Total Volume: {}", format_volume(metrics.total_volume));
    let _ = writeln!(out, "Volatility: {}", format_decimal(metrics.volatility));
    let _ = writeln!(out, "Sharpe Ratio: {}", format_sharpe(metrics.sharpe_ratio));
    let _ = writeln!(out, "Max Drawdown: {}", format_percent(metrics.max_drawdown));
    out
}

pub fn format_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => UNDEFINED.to_string(),
    }
}

fn format_sharpe(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_finite() => format!("{} (zero return volatility)", v),
        other => format_decimal(other),
    }
}

/// Fraction as a percentage with two decimals, e.g. -0.1234 -> "-12.34%".
pub fn format_percent(fraction: f64) -> String {
    let formatted = format!("{:.2}", fraction * 100.0);
    // A drawdown that rounds to zero prints as "0.00%", never "-0.00%".
    let rounds_to_zero = formatted.chars().all(|c| matches!(c, '-' | '0' | '.'));
    format!("{}%", if rounds_to_zero { formatted.trim_start_matches('-') } else { &formatted })
}

/// Whole volumes print as integers, fractional ones as raw reals.
pub fn format_volume(volume: f64) -> String {
    if volume.fract() == 0.0 && volume.abs() < 1e15 {
        format!("{:.0}", volume)
    } else {
        format!("{}", volume)
    }
}
