/// Count / mean / range summary per category.
///
/// Categories without records produce no summary at all, which is what keeps
/// them out of the text report and the JSON export.
use crate::model::{Category, InstanceRecord, PerformanceData};
use serde::Serialize;

/// Summary statistics for one non-empty category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
    /// Arithmetic mean of the instance sizes.
    pub mean: f64,
    pub min: u64,
    pub max: u64,
}

/// Summarise one category's records. Returns `None` when `records` is empty.
pub fn summarise_category(category: Category, records: &[InstanceRecord]) -> Option<CategorySummary> {
    let min = records.iter().map(|r| r.size).min()?;
    let max = records.iter().map(|r| r.size).max()?;
    // u128 so a few very large sizes cannot overflow the running sum.
    let sum: u128 = records.iter().map(|r| u128::from(r.size)).sum();

    Some(CategorySummary {
        category,
        count: records.len(),
        mean: sum as f64 / records.len() as f64,
        min,
        max,
    })
}

/// Summaries for every non-empty category, in fixed category order.
pub fn summarise(data: &PerformanceData) -> Vec<CategorySummary> {
    data.iter()
        .filter_map(|(cat, records)| summarise_category(cat, records))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_with(cat: Category, sizes: &[u64]) -> PerformanceData {
        let mut data = PerformanceData::new();
        for (i, &s) in sizes.iter().enumerate() {
            data.push(cat, InstanceRecord::new(s, format!("inst{i}.dat")));
        }
        data
    }

    #[test]
    fn mean_and_range() {
        let data = data_with(Category::Medium, &[10, 20, 45]);
        let stats = summarise(&data);

        assert_eq!(stats.len(), 1);
        let s = &stats[0];
        assert_eq!(s.category, Category::Medium);
        assert_eq!(s.count, 3);
        assert!((s.mean - 25.0).abs() < 1e-9);
        assert_eq!((s.min, s.max), (10, 45));
    }

    #[test]
    fn single_record_has_degenerate_range() {
        let data = data_with(Category::Small, &[7]);
        let s = &summarise(&data)[0];
        assert_eq!((s.min, s.max), (7, 7));
        assert!((s.mean - 7.0).abs() < 1e-9);
    }

    /// Empty categories are skipped; an all-empty run yields no summaries.
    #[test]
    fn empty_categories_are_skipped() {
        assert!(summarise(&PerformanceData::new()).is_empty());
        assert!(summarise_category(Category::Large, &[]).is_none());
    }

    #[test]
    fn summaries_follow_category_order() {
        let mut data = data_with(Category::Large, &[900]);
        data.push(Category::Small, InstanceRecord::new(5, "s.dat"));

        let cats: Vec<Category> = summarise(&data).iter().map(|s| s.category).collect();
        assert_eq!(cats, vec![Category::Small, Category::Large]);
    }

    #[test]
    fn huge_sizes_do_not_overflow() {
        let data = data_with(Category::Large, &[u64::MAX, u64::MAX]);
        let s = &summarise(&data)[0];
        assert_eq!(s.max, u64::MAX);
        assert!((s.mean - u64::MAX as f64).abs() / (u64::MAX as f64) < 1e-9);
    }
}
