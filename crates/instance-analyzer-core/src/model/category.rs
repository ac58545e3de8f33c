/// Instance size categories — one subdirectory of the data root each.
use serde::Serialize;

/// The three fixed instance-size buckets.
///
/// Declaration order is the order used everywhere: scanning, the report,
/// and the chart's x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Small,
    Medium,
    Large,
}

impl Category {
    /// Every category, in fixed order.
    pub const ALL: [Category; 3] = [Category::Small, Category::Medium, Category::Large];

    /// Subdirectory name under the data root (also the chart tick label).
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Heading used in the text report.
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "SMALL",
            Self::Medium => "MEDIUM",
            Self::Large => "LARGE",
        }
    }

    /// Position of this category in [`Category::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}
