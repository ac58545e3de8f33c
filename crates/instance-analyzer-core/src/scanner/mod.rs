/// Scanner module — collects instance records from the data directory.
///
/// Expected layout:
///
/// ```text
/// data/
///   small/   *.dat
///   medium/  *.dat
///   large/   *.dat
/// ```
///
/// Each category directory is listed one level deep with `jwalk` (serial,
/// sorted by name). A missing category directory yields no records; every
/// other failure aborts the scan with a [`ScanError`].
pub mod error;
pub mod instance;

pub use error::ScanError;
pub use instance::read_instance_size;

use crate::config::AnalyzerConfig;
use crate::model::{Category, InstanceRecord, PerformanceData};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Scan using the data root and extension from `config`.
pub fn scan(config: &AnalyzerConfig) -> Result<PerformanceData, ScanError> {
    scan_data_dir(&config.data_dir, &config.suffix())
}

/// Scan every category subdirectory of `data_dir` for files whose name
/// ends with `suffix` (e.g. `".dat"`).
pub fn scan_data_dir(data_dir: &Path, suffix: &str) -> Result<PerformanceData, ScanError> {
    let start = Instant::now();
    info!("Scanning {} for *{suffix} instances", data_dir.display());

    let mut data = PerformanceData::new();
    for category in Category::ALL {
        let count = scan_category(data_dir, category, suffix, &mut data)?;
        info!("{category}: {count} instances");
    }

    info!(
        "Scan complete: {} instances in {:.1?}",
        data.len(),
        start.elapsed()
    );
    Ok(data)
}

/// Scan one category directory into `data`, returning the number of records added.
fn scan_category(
    data_dir: &Path,
    category: Category,
    suffix: &str,
    data: &mut PerformanceData,
) -> Result<usize, ScanError> {
    let dir = data_dir.join(category.dir_name());

    match std::fs::metadata(&dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(ScanError::NotADirectory { path: dir }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist; no {category} data", dir.display());
            return Ok(0);
        }
        Err(source) => return Err(ScanError::Io { path: dir, source }),
    }

    let walker = jwalk::WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    let mut count = 0;
    for entry_result in walker {
        let entry = entry_result.map_err(|source| ScanError::Walk {
            dir: dir.clone(),
            source,
        })?;

        // Name first: entries that are not instance files are never stat'ed.
        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(suffix) {
            continue;
        }

        let path = entry.path();
        if !is_regular_file(&entry, &path)? {
            continue;
        }
        let size = read_instance_size(&path)?;
        debug!("{category}/{name}: {size} nodes");

        data.push(category, InstanceRecord::new(size, &*name));
        count += 1;
    }

    Ok(count)
}

/// Whether a listed entry is a regular file, resolving symlinks to their target.
///
/// A symlink whose target cannot be read is an error, since its name
/// already marked it as an instance file.
fn is_regular_file(entry: &jwalk::DirEntry<((), ())>, path: &Path) -> Result<bool, ScanError> {
    let file_type = entry.file_type();
    if !file_type.is_symlink() {
        return Ok(file_type.is_file());
    }
    std::fs::metadata(path)
        .map(|meta| meta.is_file())
        .map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })
}
