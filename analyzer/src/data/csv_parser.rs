use crate::error::AnalyzerError;
use csv::{ReaderBuilder, StringRecord};
use shared::models::Observation;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

pub const DATE_COLUMN: &str = "Date";
pub const CLOSE_COLUMN: &str = "Close";
pub const VOLUME_COLUMN: &str = "Volume";

// Field parsing for the date and numeric columns of the input table.
pub mod field_format {
    use chrono::{NaiveDate, NaiveDateTime};

    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];
    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    /// Parses a calendar date; a trailing time of day is accepted and dropped.
    pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
        let trimmed = s.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                    .map(|dt| dt.date())
            })
            .ok_or_else(|| "not a recognised calendar date".to_string())
    }

    /// Parses a finite real number.
    pub fn parse_number(s: &str) -> Result<f64, String> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|e| format!("not a number ({})", e))?;
        if !value.is_finite() {
            return Err("value is not finite".to_string());
        }
        Ok(value)
    }

    /// Close prices must be strictly positive; daily returns divide by them.
    pub fn parse_close(s: &str) -> Result<f64, String> {
        let value = parse_number(s)?;
        if value <= 0.0 {
            return Err("close price must be positive".to_string());
        }
        Ok(value)
    }

    pub fn parse_volume(s: &str) -> Result<f64, String> {
        let value = parse_number(s)?;
        if value < 0.0 {
            return Err("volume must not be negative".to_string());
        }
        Ok(value)
    }

}

/// Picks the delimiter that occurs most often in the header line.
pub fn detect_delimiter(header_line: &str) -> u8 {
    [b',', b';', b'\t']
        .iter()
        .map(|&d| (d, header_line.bytes().filter(|&b| b == d).count()))
        .fold((b',', 0), |best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .0
}

pub struct ObservationCsvParser;

impl ObservationCsvParser {
    // Expected header (any order, extra columns ignored): Date,Open,High,Low,Close,Volume
    // Example row: 2024-01-02,185.10,186.20,183.90,185.64,52164500
    pub fn load_observations<P: AsRef<Path>>(path: P) -> Result<Vec<Observation>, AnalyzerError> {
        let path = path.as_ref();
        let display_path = path.display().to_string();
        let io_err = |source: std::io::Error| AnalyzerError::Io { path: display_path.clone(), source };

        let file = File::open(path).map_err(io_err)?;
        let mut reader = BufReader::new(file);
        let mut header_line = String::new();
        reader.read_line(&mut header_line).map_err(io_err)?;
        reader.seek(SeekFrom::Start(0)).map_err(io_err)?;

        let delimiter = detect_delimiter(&header_line);
        tracing::debug!(path = %display_path, delimiter = ?(delimiter as char), "Opening observation table");

        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let date_idx = Self::column_index(&headers, DATE_COLUMN)?;
        let close_idx = Self::column_index(&headers, CLOSE_COLUMN)?;
        let volume_idx = Self::column_index(&headers, VOLUME_COLUMN)?;

        let mut observations: Vec<Observation> = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            // Header is line 1.
            let line = idx + 2;

            let date = Self::parse_field(&record, date_idx, DATE_COLUMN, line, field_format::parse_date)?;
            let close = Self::parse_field(&record, close_idx, CLOSE_COLUMN, line, field_format::parse_close)?;
            let volume = Self::parse_field(&record, volume_idx, VOLUME_COLUMN, line, field_format::parse_volume)?;

            if let Some(prev) = observations.last() {
                if date < prev.date {
                    tracing::warn!(line, %date, previous = %prev.date, "Dates are not in ascending order; using file order");
                }
            }

            observations.push(Observation { date, close, volume });
        }

        tracing::info!(path = %display_path, rows = observations.len(), "Loaded observations");
        Ok(observations)
    }

    fn column_index(headers: &StringRecord, name: &str) -> Result<usize, AnalyzerError> {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .ok_or_else(|| AnalyzerError::MissingColumn(name.to_string()))
    }

    fn parse_field<T>(
        record: &StringRecord,
        idx: usize,
        column: &str,
        line: usize,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T, AnalyzerError> {
        let raw = record.get(idx).unwrap_or("");
        parse(raw).map_err(|reason| AnalyzerError::InvalidField {
            line,
            column: column.to_string(),
            value: raw.to_string(),
            reason,
        })
    }
}
