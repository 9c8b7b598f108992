// Orchestration of the engine calculators for one analysis run.
pub mod analysis;

pub use analysis::{analyze, Analysis};
