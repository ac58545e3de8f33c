/// Category-indexed collection of scanned instance records.
///
/// Backed by a fixed array with one slot per [`Category`], so lookups are a
/// plain index and iteration always follows the fixed category order.
use super::{Category, InstanceRecord};

/// All records found in one run, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceData {
    records: [Vec<InstanceRecord>; 3],
}

impl PerformanceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to `category`.
    pub fn push(&mut self, category: Category, record: InstanceRecord) {
        self.records[category.index()].push(record);
    }

    /// Records for one category, in scan order. Empty if none were found.
    pub fn records(&self, category: Category) -> &[InstanceRecord] {
        &self.records[category.index()]
    }

    /// Sizes for one category, in scan order.
    pub fn sizes(&self, category: Category) -> Vec<u64> {
        self.records(category).iter().map(|r| r.size).collect()
    }

    /// `(category, records)` pairs for every category, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[InstanceRecord])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |cat| (cat, self.records(cat)))
    }

    /// Total number of records across all categories.
    pub fn len(&self) -> usize {
        self.records.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
