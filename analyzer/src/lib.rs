// Analyzer library root

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod metrics;
pub mod render;
pub mod services;

pub use error::AnalyzerError;
