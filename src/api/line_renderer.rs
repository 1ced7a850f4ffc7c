use tracing::trace;

use crate::core::{Row, project_line_series};
use crate::error::ChartResult;
use crate::render::{Attrs, polyline};

use super::series_renderer::render_marker_group;
use super::{RenderContext, SeriesRenderer};

/// One stroked polyline per series plus a hover marker per cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineRenderer;

impl SeriesRenderer for LineRenderer {
    fn stacked(&self) -> bool {
        false
    }

    fn render_rows(
        &self,
        ctx: &RenderContext<'_>,
        rows: &[Row],
        legend: &[String],
    ) -> ChartResult<String> {
        let lines = project_line_series(rows, ctx.scale, ctx.config.width)?;

        // Markers go after every stroke so no line covers a tooltip target.
        let mut strokes = String::new();
        let mut markers = String::new();
        for line in &lines {
            trace!(series = line.series, points = line.points.len(), "emit line series");
            strokes.push_str(&polyline(
                &line.points,
                Attrs::new()
                    .with("fill", "none")
                    .with("stroke", ctx.config.color(line.series)),
            ));
            markers.push_str(&render_marker_group(
                ctx,
                rows,
                legend,
                line.series,
                &line.points,
            ));
        }

        strokes.push_str(&markers);
        Ok(strokes)
    }
}
