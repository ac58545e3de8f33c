/// Run configuration.
///
/// Every field has a built-in default, so a run with no arguments reads
/// `data/<category>/*.dat` and writes `performance_analysis.png` into the
/// working directory.
use std::path::PathBuf;

/// Default data root, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default chart output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "performance_analysis.png";

/// Default recognised instance file extension (without the dot).
pub const DEFAULT_EXTENSION: &str = "dat";

/// Default chart size in pixels (a 15 x 10 inch figure at 100 dpi).
pub const DEFAULT_CHART_SIZE: (u32, u32) = (1500, 1000);

/// Everything one analysis run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Root directory holding one subdirectory per category.
    pub data_dir: PathBuf,
    /// PNG file the boxplot is written to. Overwritten if present.
    pub output: PathBuf,
    /// File extension (without the dot) that marks an instance file.
    pub extension: String,
    /// Chart width and height in pixels.
    pub chart_size: (u32, u32),
    /// Optional JSON export of the per-category summary.
    pub json_output: Option<PathBuf>,
    /// Optional CSV export of every scanned record.
    pub csv_output: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extension: DEFAULT_EXTENSION.to_owned(),
            chart_size: DEFAULT_CHART_SIZE,
            json_output: None,
            csv_output: None,
        }
    }
}

impl AnalyzerConfig {
    /// Default configuration rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// The filename suffix the scanner matches, e.g. `".dat"`.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }
}
