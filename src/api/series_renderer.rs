use tracing::trace;

use crate::core::{BarCell, PlotPoint, Row, ValueScale, cell_title};
use crate::error::ChartResult;
use crate::render::{Attrs, Content, DEFAULT_MARKER_RADIUS, circle, element, rect};

use super::ChartRendererConfig;

/// Per-call state shared by the layout engine and series renderers.
///
/// Built fresh for every render so the renderer itself never mutates.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a ChartRendererConfig,
    pub scale: ValueScale,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn new(config: &'a ChartRendererConfig, scale: ValueScale) -> Self {
        Self { config, scale }
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.scale.max_value()
    }
}

/// Contract implemented by every chart type.
///
/// Implementations turn validated rows into series markup: one shape per
/// (row, series) cell carrying a tooltip and `role="cell"`, grouped per
/// series under `role="row"`.
pub trait SeriesRenderer: Send + Sync {
    /// Whether the axis scales to the largest row sum instead of the largest value.
    fn stacked(&self) -> bool;

    fn render_rows(
        &self,
        ctx: &RenderContext<'_>,
        rows: &[Row],
        legend: &[String],
    ) -> ChartResult<String>;
}

/// Wraps one series' cell markup in its accessibility row group.
pub(crate) fn series_group(ctx: &RenderContext<'_>, series: usize, cells: &str) -> String {
    element(
        "g",
        Content::Markup(cells),
        &Attrs::new()
            .with("fill", ctx.config.color(series))
            .with("stroke", ctx.config.contrast_color.as_str())
            .with("role", "row"),
    )
}

/// Serializes per-series bar cells, one group per series.
pub(crate) fn render_bar_groups(
    ctx: &RenderContext<'_>,
    rows: &[Row],
    legend: &[String],
    per_series: &[Vec<BarCell>],
) -> String {
    let mut out = String::new();
    for (series, cells) in per_series.iter().enumerate() {
        let mut group = String::new();
        for cell in cells {
            let title = cell_title(rows, legend, cell.row, cell.series);
            group.push_str(&rect(
                cell.x,
                cell.y,
                cell.width,
                cell.height,
                title.as_deref(),
                Attrs::new().with("role", "cell"),
            ));
        }
        trace!(series, cells = cells.len(), "emit bar series");
        out.push_str(&series_group(ctx, series, &group));
    }
    out
}

/// Serializes hover markers for one series, one circle per row.
pub(crate) fn render_marker_group(
    ctx: &RenderContext<'_>,
    rows: &[Row],
    legend: &[String],
    series: usize,
    points: &[PlotPoint],
) -> String {
    let mut group = String::new();
    for (row, point) in points.iter().enumerate() {
        let title = cell_title(rows, legend, row, series);
        group.push_str(&circle(
            point.x,
            point.y,
            DEFAULT_MARKER_RADIUS,
            title.as_deref(),
            Attrs::new().with("role", "cell"),
        ));
    }
    series_group(ctx, series, &group)
}
