use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing system error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid value '{value}' in column '{column}' at line {line}: {reason}")]
    InvalidField {
        line: usize,
        column: String,
        value: String,
        reason: String,
    },

    #[error("Observation series is empty")]
    EmptySeries,

    #[error("Invalid window for {indicator}: {window} (must be at least 1)")]
    InvalidWindow { indicator: String, window: usize },
}

impl AnalyzerError {
    /// Loading/parsing failures: the input file itself is unusable.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AnalyzerError::Io { .. }
                | AnalyzerError::Csv { .. }
                | AnalyzerError::MissingColumn(_)
                | AnalyzerError::InvalidField { .. }
        )
    }

    /// The data loaded fine but cannot support the requested computation.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            AnalyzerError::EmptySeries | AnalyzerError::InvalidWindow { .. }
        )
    }
}
