/// Instance Analyzer Viz — chart rendering and the run pipeline.
///
/// Business logic lives in `instance-analyzer-core`; this crate turns its
/// output into a PNG boxplot and wires scan → chart → report together.
pub mod chart;
pub mod pipeline;
pub mod theme;

pub use chart::{render_boxplot, ChartError};
pub use pipeline::{run, PipelineError, RunOutcome};
