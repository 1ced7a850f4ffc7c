use crate::core::{Row, project_grouped_columns};
use crate::error::ChartResult;

use super::series_renderer::render_bar_groups;
use super::{RenderContext, SeriesRenderer};

/// Grouped columns: series side by side within each row's band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnRenderer;

impl SeriesRenderer for ColumnRenderer {
    fn stacked(&self) -> bool {
        false
    }

    fn render_rows(
        &self,
        ctx: &RenderContext<'_>,
        rows: &[Row],
        legend: &[String],
    ) -> ChartResult<String> {
        let per_series = project_grouped_columns(rows, ctx.scale, ctx.config.width)?;
        Ok(render_bar_groups(ctx, rows, legend, &per_series))
    }
}
