// Data models and numeric helpers shared by the analyzer crate and its tests.
pub mod models;
pub mod utils;
