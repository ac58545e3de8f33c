/// Chart colours.
///
/// All colour constants are defined here so the drawing code references
/// semantically-named values rather than raw hex codes.
use instance_analyzer_core::Category;
use plotters::style::RGBColor;

pub const BACKGROUND: RGBColor = RGBColor(0xff, 0xff, 0xff);
pub const OUTLINE: RGBColor = RGBColor(0x1e, 0x1e, 0x2e);
pub const GRID: RGBColor = RGBColor(0xe0, 0xe0, 0xe6);
pub const MEDIAN: RGBColor = RGBColor(0xfa, 0xb3, 0x87);
pub const FLIER: RGBColor = RGBColor(0x6c, 0x70, 0x86);

/// Box fill colour per category.
pub fn category_color(cat: Category) -> RGBColor {
    match cat {
        Category::Small => RGBColor(0xa6, 0xe3, 0xa1),
        Category::Medium => RGBColor(0x89, 0xb4, 0xfa),
        Category::Large => RGBColor(0xf3, 0x8b, 0xa8),
    }
}
