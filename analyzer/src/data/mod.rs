// Loading of the observation table.
pub mod csv_parser;

pub use csv_parser::ObservationCsvParser;
