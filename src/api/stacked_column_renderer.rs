use crate::core::{Row, project_stacked_columns};
use crate::error::ChartResult;

use super::series_renderer::render_bar_groups;
use super::{RenderContext, SeriesRenderer};

/// One bar per row with series segments stacked bottom to top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackedColumnRenderer;

impl SeriesRenderer for StackedColumnRenderer {
    fn stacked(&self) -> bool {
        true
    }

    fn render_rows(
        &self,
        ctx: &RenderContext<'_>,
        rows: &[Row],
        legend: &[String],
    ) -> ChartResult<String> {
        let per_series = project_stacked_columns(rows, ctx.scale, ctx.config.width)?;
        Ok(render_bar_groups(ctx, rows, legend, &per_series))
    }
}
