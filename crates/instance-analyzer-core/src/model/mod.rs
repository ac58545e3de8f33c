/// Data model for a single analysis run.
///
/// Re-exports the category enum, the per-file record, and the
/// category-indexed collection produced by the scanner.
pub mod category;
pub mod performance_data;
pub mod record;

pub use category::Category;
pub use performance_data::PerformanceData;
pub use record::InstanceRecord;
