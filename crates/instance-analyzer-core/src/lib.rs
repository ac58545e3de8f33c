/// Instance Analyzer Core — scanning, statistics, and reporting.
///
/// This crate contains all business logic with zero rendering dependencies.
/// The chart and the run pipeline live in `instance-analyzer-viz`.
///
/// # Modules
///
/// - [`model`] — Categories, per-instance records, and the scanned data set.
/// - [`config`] — Run configuration with the built-in defaults.
/// - [`scanner`] — Reads `data/<category>/*.dat` into [`model::PerformanceData`].
/// - [`analysis`] — Per-category summaries and boxplot statistics.
/// - [`report`] — Plain-text summary written to stdout.
/// - [`export`] — Optional JSON / CSV outputs.
pub mod analysis;
pub mod config;
pub mod export;
pub mod model;
pub mod report;
pub mod scanner;

pub use config::AnalyzerConfig;
pub use model::{Category, InstanceRecord, PerformanceData};
