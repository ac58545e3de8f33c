/// Machine-readable exports: JSON summary and per-record CSV.
use crate::analysis::CategorySummary;
use crate::model::{Category, PerformanceData};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode JSON for {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Column names of the records CSV, matching [`RecordRow`]'s fields.
pub const CSV_HEADER: [&str; 3] = ["category", "filename", "size"];

/// One CSV row.
#[derive(Serialize)]
struct RecordRow<'a> {
    category: Category,
    filename: &'a str,
    size: u64,
}

/// Write `summaries` as a pretty-printed JSON array to `path`.
pub fn write_summary_json(summaries: &[CategorySummary], path: &Path) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summaries).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    info!("Wrote summary JSON to {}", path.display());
    Ok(())
}

/// Write every record as `category,filename,size` (with header) to `path`.
pub fn write_records_csv(data: &PerformanceData, path: &Path) -> Result<(), ExportError> {
    let csv_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // Header is written explicitly so an empty data set still gets one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    writer.write_record(CSV_HEADER).map_err(csv_err)?;
    for (category, records) in data.iter() {
        for record in records {
            writer
                .serialize(RecordRow {
                    category,
                    filename: &record.filename,
                    size: record.size,
                })
                .map_err(csv_err)?;
        }
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {} records to {}", data.len(), path.display());
    Ok(())
}
