/// Boxplot of instance sizes per category, rendered to PNG with `plotters`.
///
/// Categories sit at x = 1, 2, 3 in fixed order. A category without records
/// keeps its slot on the axis but draws nothing, so an all-empty data set
/// still produces an image with three empty slots.
///
/// Caption, axis description and tick labels are drawn only with the `ttf`
/// feature: text rendering goes through system fonts, which headless hosts
/// often lack. Without it the chart carries the boxes and grid lines only.
use crate::theme;
use instance_analyzer_core::analysis::{box_stats, BoxStats};
use instance_analyzer_core::{Category, PerformanceData};
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

pub const CHART_TITLE: &str = "Instance Size Distribution by Category";
pub const Y_AXIS_DESC: &str = "Number of Nodes";

/// Half the box width, in x-axis units (one category slot is 1.0 wide).
const BOX_HALF_WIDTH: f64 = 0.25;
/// Half the whisker cap width, in x-axis units.
const CAP_HALF_WIDTH: f64 = 0.125;
/// Flier marker radius in pixels.
const FLIER_RADIUS: i32 = 4;
/// Number of horizontal grid lines.
const GRID_LINES: usize = 10;

/// Errors that can occur while rendering the chart.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("invalid chart size {0}x{1}")]
    InvalidSize(u32, u32),

    #[error("failed to prepare drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("failed to save chart image: {0}")]
    Save(String),
}

type Result<T> = core::result::Result<T, ChartError>;

/// Render one box per category from `data` and save it as a PNG at `path`.
///
/// An existing file at `path` is overwritten.
pub fn render_boxplot(data: &PerformanceData, path: &Path, size: (u32, u32)) -> Result<()> {
    let boxes: Vec<(Category, BoxStats)> = Category::ALL
        .into_iter()
        .filter_map(|cat| box_stats(&data.sizes(cat)).map(|b| (cat, b)))
        .collect();
    draw_boxes(&boxes, path, size)?;

    info!(
        "Wrote boxplot ({} of {} categories populated) to {}",
        boxes.len(),
        Category::ALL.len(),
        path.display()
    );
    Ok(())
}

/// X coordinate of a category's slot.
pub fn slot_x(cat: Category) -> f64 {
    (cat.index() + 1) as f64
}

/// Tick label for an x value: the category name at slot centres, blank elsewhere.
pub fn slot_label(x: f64) -> String {
    Category::ALL
        .into_iter()
        .find(|&cat| (slot_x(cat) - x).abs() < 1e-6)
        .map(|cat| cat.dir_name().to_owned())
        .unwrap_or_default()
}

/// Padded y range covering every box, whisker and flier.
///
/// Falls back to `0..1` when there is nothing to draw, and widens a
/// zero-height range so the axis is never degenerate.
pub fn value_range(boxes: &[(Category, BoxStats)]) -> (f64, f64) {
    let lo = boxes.iter().map(|(_, b)| b.lowest()).fold(f64::INFINITY, f64::min);
    let hi = boxes
        .iter()
        .map(|(_, b)| b.highest())
        .fold(f64::NEG_INFINITY, f64::max);

    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo < f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

fn draw_boxes(boxes: &[(Category, BoxStats)], path: &Path, size: (u32, u32)) -> Result<()> {
    if size.0 == 0 || size.1 == 0 {
        return Err(ChartError::InvalidSize(size.0, size.1));
    }

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&theme::BACKGROUND)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let (y_lo, y_hi) = value_range(boxes);
    debug!("y range {y_lo:.2}..{y_hi:.2}");

    let x_range = 0.5..(Category::ALL.len() as f64 + 0.5);

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if cfg!(feature = "ttf") {
        builder
            .caption(CHART_TITLE, ("sans-serif", 40))
            .x_label_area_size(60)
            .y_label_area_size(85);
    }
    let mut chart = builder
        .build_cartesian_2d(x_range.clone(), y_lo..y_hi)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    if cfg!(feature = "ttf") {
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(Category::ALL.len())
            .x_label_formatter(&|x| slot_label(*x))
            .y_desc(Y_AXIS_DESC)
            .label_style(("sans-serif", 25))
            .draw()
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
    }

    // Horizontal grid.
    let step = (y_hi - y_lo) / GRID_LINES as f64;
    chart
        .draw_series((1..GRID_LINES).map(|i| {
            let y = y_lo + step * i as f64;
            PathElement::new(vec![(x_range.start, y), (x_range.end, y)], theme::GRID)
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    // Whiskers and caps first so the box paints over the whisker stems.
    chart
        .draw_series(boxes.iter().flat_map(|(cat, b)| {
            let x = slot_x(*cat);
            [
                vec![(x, b.whisker_low), (x, b.q1)],
                vec![(x, b.q3), (x, b.whisker_high)],
                vec![(x - CAP_HALF_WIDTH, b.whisker_low), (x + CAP_HALF_WIDTH, b.whisker_low)],
                vec![(x - CAP_HALF_WIDTH, b.whisker_high), (x + CAP_HALF_WIDTH, b.whisker_high)],
            ]
            .into_iter()
            .map(|pts| PathElement::new(pts, theme::OUTLINE.stroke_width(2)))
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(boxes.iter().map(|(cat, b)| {
            let x = slot_x(*cat);
            Rectangle::new(
                [(x - BOX_HALF_WIDTH, b.q3), (x + BOX_HALF_WIDTH, b.q1)],
                theme::category_color(*cat).filled(),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(boxes.iter().map(|(cat, b)| {
            let x = slot_x(*cat);
            Rectangle::new(
                [(x - BOX_HALF_WIDTH, b.q3), (x + BOX_HALF_WIDTH, b.q1)],
                theme::OUTLINE.stroke_width(2),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(boxes.iter().map(|(cat, b)| {
            let x = slot_x(*cat);
            PathElement::new(
                vec![(x - BOX_HALF_WIDTH, b.median), (x + BOX_HALF_WIDTH, b.median)],
                theme::MEDIAN.stroke_width(3),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(boxes.iter().flat_map(|(cat, b)| {
            let x = slot_x(*cat);
            b.fliers
                .iter()
                .map(move |&y| Circle::new((x, y), FLIER_RADIUS, theme::FLIER.stroke_width(1)))
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Save(e.to_string()))?;
    Ok(())
}
