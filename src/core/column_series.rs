use serde::{Deserialize, Serialize};

use crate::core::{DatasetShape, Row, ValueScale};
use crate::error::ChartResult;

/// Deterministic bar rectangle in pixel coordinates.
///
/// `height` is negative for negative values, producing an inverted bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarCell {
    pub row: usize,
    pub series: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects rows into side-by-side (grouped) bars, one `Vec` per series.
///
/// Each row owns a band of `canvas_width / rows`; the band is split into
/// `series + 2` slots so one empty slot stays on either side of the group.
pub fn project_grouped_columns(
    rows: &[Row],
    scale: ValueScale,
    canvas_width: f64,
) -> ChartResult<Vec<Vec<BarCell>>> {
    let shape = DatasetShape::of_rows(rows)?;
    let slots = shape.series + 2;
    let width = canvas_width / shape.rows as f64 / slots as f64;

    let mut per_series = Vec::with_capacity(shape.series);
    for series in 0..shape.series {
        let mut cells = Vec::with_capacity(shape.rows);
        for (row_index, row) in rows.iter().enumerate() {
            let height = scale.value_to_height(row.values[series]);
            cells.push(BarCell {
                row: row_index,
                series,
                x: width * (row_index * slots + series + 1) as f64,
                y: scale.canvas_height() - height,
                width,
                height,
            });
        }
        per_series.push(cells);
    }

    Ok(per_series)
}
