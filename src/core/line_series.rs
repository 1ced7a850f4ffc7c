use serde::{Deserialize, Serialize};

use crate::core::{DatasetShape, PlotPoint, Row, ValueScale};
use crate::error::ChartResult;

/// Open polyline for one series; each vertex doubles as a hover marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesGeometry {
    pub series: usize,
    pub points: Vec<PlotPoint>,
}

/// Projects every series into a polyline through the row band centers.
pub fn project_line_series(
    rows: &[Row],
    scale: ValueScale,
    canvas_width: f64,
) -> ChartResult<Vec<LineSeriesGeometry>> {
    let shape = DatasetShape::of_rows(rows)?;
    let band = canvas_width / shape.rows as f64;

    Ok((0..shape.series)
        .map(|series| LineSeriesGeometry {
            series,
            points: rows
                .iter()
                .enumerate()
                .map(|(row_index, row)| {
                    PlotPoint::new(
                        band * (row_index as f64 + 0.5),
                        scale.value_to_y(row.values[series]),
                    )
                })
                .collect(),
        })
        .collect())
}
