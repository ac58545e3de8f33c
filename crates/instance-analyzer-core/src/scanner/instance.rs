/// Reading the size header of a single instance file.
use super::ScanError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read the node count from the first line of `path`.
///
/// Only the first line is read; the handle is dropped on return. The
/// remainder of the file (cost matrix, metadata) is never touched.
pub fn read_instance_size(path: &Path) -> Result<u64, ScanError> {
    let io_err = |source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(path).map_err(io_err)?);
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(io_err)?;
    if read == 0 {
        return Err(ScanError::MissingSizeLine {
            path: path.to_path_buf(),
        });
    }

    parse_size_line(&line).map_err(|source| ScanError::InvalidSize {
        path: path.to_path_buf(),
        line: line.trim_end_matches(['\r', '\n']).to_owned(),
        source,
    })
}

/// Parse a size line. Surrounding whitespace is ignored; negatives are rejected.
pub fn parse_size_line(line: &str) -> Result<u64, std::num::ParseIntError> {
    line.trim().parse::<u64>()
}
