use serde::{Deserialize, Serialize};

use crate::core::{DatasetShape, PlotPoint, Row, ValueScale};
use crate::error::ChartResult;

/// Band of one series between its cumulative curve and the curve below it.
///
/// `upper` carries the hover markers. `lower` is the previous series'
/// `upper`, or the baseline for the first series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedAreaGeometry {
    pub series: usize,
    pub upper: Vec<PlotPoint>,
    pub lower: Vec<PlotPoint>,
}

impl StackedAreaGeometry {
    /// Closed outline: the upper edge forward, then the lower edge reversed.
    #[must_use]
    pub fn fill_polygon(&self) -> Vec<PlotPoint> {
        let mut polygon = Vec::with_capacity(self.upper.len() + self.lower.len());
        polygon.extend(self.upper.iter().copied());
        polygon.extend(self.lower.iter().rev().copied());
        polygon
    }
}

/// Projects series into stacked bands, carrying the cumulative curve from one
/// series to the next.
pub fn project_stacked_areas(
    rows: &[Row],
    scale: ValueScale,
    canvas_width: f64,
) -> ChartResult<Vec<StackedAreaGeometry>> {
    let shape = DatasetShape::of_rows(rows)?;
    let band = canvas_width / shape.rows as f64;

    let mut lower: Vec<PlotPoint> = (0..shape.rows)
        .map(|row_index| PlotPoint::new(band * (row_index as f64 + 0.5), scale.canvas_height()))
        .collect();
    let mut areas = Vec::with_capacity(shape.series);
    for series in 0..shape.series {
        let upper: Vec<PlotPoint> = rows
            .iter()
            .zip(&lower)
            .map(|(row, below)| {
                PlotPoint::new(below.x, below.y - scale.value_to_height(row.values[series]))
            })
            .collect();
        areas.push(StackedAreaGeometry {
            series,
            upper: upper.clone(),
            lower: std::mem::replace(&mut lower, upper),
        });
    }

    Ok(areas)
}
