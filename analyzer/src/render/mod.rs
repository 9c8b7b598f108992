// Text output: the metric report and the stacked terminal chart.
pub mod chart;
pub mod report;

pub use chart::render_chart;
pub use report::format_report;
