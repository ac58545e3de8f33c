/// Boxplot statistics — quartiles, whiskers and fliers for one category.
///
/// Quartiles use linear interpolation between closest ranks. Whiskers reach
/// the most extreme data point still within 1.5 × IQR of the box; anything
/// beyond is reported as a flier.
use serde::Serialize;

/// Whisker reach as a multiple of the interquartile range.
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Everything needed to draw one box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    /// Points outside the whiskers, ascending.
    pub fliers: Vec<f64>,
}

impl BoxStats {
    /// Smallest value the box occupies, fliers included.
    pub fn lowest(&self) -> f64 {
        self.fliers.first().map_or(self.whisker_low, |&f| f.min(self.whisker_low))
    }

    /// Largest value the box occupies, fliers included.
    pub fn highest(&self) -> f64 {
        self.fliers.last().map_or(self.whisker_high, |&f| f.max(self.whisker_high))
    }
}

/// Linear-interpolated percentile (`pct` in 0–100) of an ascending slice.
///
/// Returns `None` for an empty slice.
pub fn percentile_of_sorted(sorted: &[f64], pct: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = (pct.clamp(0.0, 100.0) / 100.0) * last as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(last);
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Compute box statistics for `sizes`. Returns `None` when `sizes` is empty.
pub fn box_stats(sizes: &[u64]) -> Option<BoxStats> {
    let mut sorted: Vec<f64> = sizes.iter().map(|&s| s as f64).collect();
    sorted.sort_by(f64::total_cmp);

    let q1 = percentile_of_sorted(&sorted, 25.0)?;
    let median = percentile_of_sorted(&sorted, 50.0)?;
    let q3 = percentile_of_sorted(&sorted, 75.0)?;

    let reach = (q3 - q1) * WHISKER_IQR_FACTOR;
    let (low_fence, high_fence) = (q1 - reach, q3 + reach);

    let whisker_low = sorted
        .iter()
        .copied()
        .find(|&v| v >= low_fence)
        .unwrap_or(q1);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= high_fence)
        .unwrap_or(q3);

    let fliers = sorted
        .iter()
        .copied()
        .filter(|&v| v < whisker_low || v > whisker_high)
        .collect();

    Some(BoxStats {
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        fliers,
    })
}
