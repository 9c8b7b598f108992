use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn sample_csv() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("prices_small.csv")
}

fn run_analyzer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_financial-analyzer"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn financial-analyzer")
}

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp csv");
    writeln!(file, "{}", content).expect("write csv");
    file
}

#[test]
fn cli_runs_on_sample_dataset() {
    let sample = sample_csv();
    assert!(sample.exists(), "sample CSV missing at {}", sample.display());

    let output = run_analyzer(&["--file", sample.to_str().expect("sample path")]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.starts_with("Financial Data Analysis\n------------------------\n"));
    assert!(stdout.contains("Mean Close Price: 156.51\n"));
    assert!(stdout.contains("Standard Deviation of Close Price: 6.53\n"));
    assert!(stdout.contains("Total Volume: 50251770\n"));
    assert!(stdout.contains("Volatility: "));
    assert!(stdout.contains("Sharpe Ratio: "));
    assert!(stdout.contains("Max Drawdown: -"));
    assert!(stdout.contains("Stock Price and Moving Average"));
    assert!(stdout.contains("Relative Strength Index (RSI)"));
    assert!(stdout.contains("SMA(3)"));
}

#[test]
fn cli_accepts_custom_window() {
    let sample = sample_csv();
    let output = run_analyzer(&["--file", sample.to_str().expect("sample path"), "--window", "5"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("Moving Average SMA(5)"));
}

#[test]
fn cli_missing_close_column_fails_without_report() {
    let csv = write_csv("Date,Open,Volume\n2024-01-02,10.0,100\n2024-01-03,10.5,200");
    let output = run_analyzer(&["--file", csv.path().to_str().expect("temp path")]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "stdout should be empty on failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing required column 'Close'"), "stderr: {}", stderr);
}

#[test]
fn cli_missing_file_fails() {
    let output = run_analyzer(&["--file", "/no/such/prices.csv"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_empty_table_fails() {
    let csv = write_csv("Date,Close,Volume");
    let output = run_analyzer(&["--file", csv.path().to_str().expect("temp path")]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty"));
}

#[test]
fn cli_requires_file_argument() {
    let output = run_analyzer(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_single_row_reports_undefined_metrics() {
    let csv = write_csv("Date,Close,Volume\n2024-01-02,10.0,100");
    let output = run_analyzer(&["--file", csv.path().to_str().expect("temp path")]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("Standard Deviation of Close Price: undefined"));
    assert!(stdout.contains("Sharpe Ratio: undefined"));
    assert!(stdout.contains("Max Drawdown: 0.00%"));
}
