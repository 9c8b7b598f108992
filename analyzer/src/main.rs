// Financial analyzer entry point
use analyzer::cli::Cli;
use analyzer::config::settings::AnalyzerSettings;
use analyzer::data::ObservationCsvParser;
use analyzer::render::{format_report, render_chart};
use analyzer::services::analyze;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // stdout carries the report; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let settings = AnalyzerSettings::with_ma_window(cli.window as usize);

    let observations = ObservationCsvParser::load_observations(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;
    let analysis = analyze(&observations, &settings)
        .with_context(|| format!("failed to analyze {}", cli.file.display()))?;

    // Build the whole output first so a failure leaves stdout empty.
    let mut output = format_report(&analysis.metrics);
    output.push('\n');
    output.push_str(&render_chart(&analysis, &settings.chart));
    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    tracing::info!(file = %cli.file.display(), window = cli.window, "Starting financial analyzer");

    // An Err here is printed to stderr with its cause chain and exits non-zero.
    let output = run(cli)?;
    print!("{}", output);
    Ok(())
}
