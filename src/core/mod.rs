pub mod column_series;
pub mod legend_layout;
pub mod line_series;
pub mod scale;
pub mod stacked_area_series;
pub mod stacked_column_series;
pub mod types;

pub use column_series::{BarCell, project_grouped_columns};
pub use legend_layout::{LegendEntry, LegendLayout, LegendRow, TextMetrics, layout_legend};
pub use line_series::{LineSeriesGeometry, project_line_series};
pub use scale::{MIN_AXIS_CEILING, ValueScale, round_max};
pub use stacked_area_series::{StackedAreaGeometry, project_stacked_areas};
pub use stacked_column_series::project_stacked_columns;
pub use types::{ChartData, DatasetShape, PlotPoint, Row, cell_title};
