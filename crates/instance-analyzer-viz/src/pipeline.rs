/// The complete analysis run: scan → chart → report → optional exports.
///
/// The scan finishes before anything is written, so a malformed instance
/// file aborts the run with no chart and no report.
use crate::chart::{render_boxplot, ChartError};
use instance_analyzer_core::analysis::{summarise, CategorySummary};
use instance_analyzer_core::export::{write_records_csv, write_summary_json, ExportError};
use instance_analyzer_core::report::write_report;
use instance_analyzer_core::scanner::{self, ScanError};
use instance_analyzer_core::{AnalyzerConfig, PerformanceData};
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// What a successful run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub data: PerformanceData,
    pub summaries: Vec<CategorySummary>,
}

/// Run the analysis described by `config`, writing the text report to `out`.
pub fn run<W: Write>(config: &AnalyzerConfig, out: &mut W) -> Result<RunOutcome, PipelineError> {
    let data = scanner::scan(config)?;

    render_boxplot(&data, &config.output, config.chart_size)?;

    let summaries = summarise(&data);
    write_report(out, &summaries)?;

    if let Some(path) = &config.json_output {
        write_summary_json(&summaries, path)?;
    }
    if let Some(path) = &config.csv_output {
        write_records_csv(&data, path)?;
    }

    Ok(RunOutcome { data, summaries })
}
