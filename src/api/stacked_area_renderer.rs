use tracing::trace;

use crate::core::{Row, project_stacked_areas};
use crate::error::ChartResult;
use crate::render::{Attrs, path};

use super::series_renderer::render_marker_group;
use super::{RenderContext, SeriesRenderer};

/// Filled bands stacked series over series, with markers on each upper edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackedAreaRenderer;

impl SeriesRenderer for StackedAreaRenderer {
    fn stacked(&self) -> bool {
        true
    }

    fn render_rows(
        &self,
        ctx: &RenderContext<'_>,
        rows: &[Row],
        legend: &[String],
    ) -> ChartResult<String> {
        let areas = project_stacked_areas(rows, ctx.scale, ctx.config.width)?;

        let mut fills = String::new();
        let mut markers = String::new();
        for area in &areas {
            trace!(series = area.series, points = area.upper.len(), "emit area series");
            fills.push_str(&path(
                &area.fill_polygon(),
                Attrs::new()
                    .with("fill", ctx.config.color(area.series))
                    .with("stroke", ctx.config.contrast_color.as_str()),
            ));
            markers.push_str(&render_marker_group(
                ctx,
                rows,
                legend,
                area.series,
                &area.upper,
            ));
        }

        fills.push_str(&markers);
        Ok(fills)
    }
}
