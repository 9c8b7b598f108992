use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "financial-analyzer",
    version,
    about = "Financial Data Analyzer"
)]
pub struct Cli {
    /// Path to the financial data CSV file (needs Date, Close and Volume columns)
    #[arg(long = "file", value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Window size for the moving average
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pub window: u32,
}
