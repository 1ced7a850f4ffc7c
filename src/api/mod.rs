mod chart_renderer;
mod column_renderer;
mod layout_engine;
mod line_renderer;
mod renderer_config;
mod series_renderer;
mod stacked_area_renderer;
mod stacked_column_renderer;
mod table_input;

pub use chart_renderer::{ChartKind, ChartRenderer};
pub use column_renderer::ColumnRenderer;
pub use layout_engine::LayoutEngine;
pub use line_renderer::LineRenderer;
pub use renderer_config::{ChartRendererConfig, DEFAULT_COLORS};
pub use series_renderer::{RenderContext, SeriesRenderer};
pub use stacked_area_renderer::StackedAreaRenderer;
pub use stacked_column_renderer::StackedColumnRenderer;
