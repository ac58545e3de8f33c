/// A single scanned problem instance.
use compact_str::CompactString;

/// One `.dat` file: its name and the node count from its first line.
///
/// Built once by the scanner and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRecord {
    /// Instance size in nodes.
    pub size: u64,
    /// File name only (NOT the full path).
    pub filename: CompactString,
}

impl InstanceRecord {
    pub fn new(size: u64, filename: impl Into<CompactString>) -> Self {
        Self {
            size,
            filename: filename.into(),
        }
    }
}
