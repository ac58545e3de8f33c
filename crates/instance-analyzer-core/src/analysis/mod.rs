/// Analysis modules — per-category statistics computed after the scan.

pub mod box_stats;
pub mod summary;

pub use box_stats::{box_stats, percentile_of_sorted, BoxStats};
pub use summary::{summarise, summarise_category, CategorySummary};
