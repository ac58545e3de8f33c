/// Scan failures. Every variant is fatal to the run.
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list {}: {source}", dir.display())]
    Walk {
        dir: PathBuf,
        #[source]
        source: jwalk::Error,
    },

    #[error("category path {} exists but is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("{} is empty; expected the instance size on the first line", path.display())]
    MissingSizeLine { path: PathBuf },

    #[error("invalid instance size {line:?} in {}: {source}", path.display())]
    InvalidSize {
        path: PathBuf,
        line: String,
        #[source]
        source: ParseIntError,
    },
}
