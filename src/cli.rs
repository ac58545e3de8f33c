use clap::Parser;
use instance_analyzer_core::config::{DEFAULT_DATA_DIR, DEFAULT_EXTENSION, DEFAULT_OUTPUT};
use instance_analyzer_core::AnalyzerConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "instance-analyzer",
    about = "Summarise problem instance sizes per category and plot their distribution"
)]
pub struct Cli {
    /// Data directory containing small/, medium/ and large/ subdirectories
    #[arg(default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// PNG file to write the boxplot to (overwritten if present)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Extension of instance files, without the dot
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Also write the per-category summary as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Also write every scanned instance as CSV
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> AnalyzerConfig {
        AnalyzerConfig {
            data_dir: self.data_dir,
            output: self.output,
            extension: self.extension,
            json_output: self.json,
            csv_output: self.csv,
            ..AnalyzerConfig::default()
        }
    }
}
