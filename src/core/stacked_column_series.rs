use crate::core::{BarCell, DatasetShape, Row, ValueScale};
use crate::error::ChartResult;

/// Projects rows into vertically stacked bars, one `Vec` per series.
///
/// Every row gets a single bar a third of its band wide, centered in the band.
/// Segments stack upward from the baseline in series order.
pub fn project_stacked_columns(
    rows: &[Row],
    scale: ValueScale,
    canvas_width: f64,
) -> ChartResult<Vec<Vec<BarCell>>> {
    let shape = DatasetShape::of_rows(rows)?;
    let band = canvas_width / shape.rows as f64;

    let mut per_series: Vec<Vec<BarCell>> = (0..shape.series)
        .map(|_| Vec::with_capacity(shape.rows))
        .collect();
    for (row_index, row) in rows.iter().enumerate() {
        let center_x = band * (row_index as f64 + 0.5);
        let mut y = scale.canvas_height();
        for (series, &value) in row.values.iter().enumerate() {
            let height = scale.value_to_height(value);
            y -= height;
            per_series[series].push(BarCell {
                row: row_index,
                series,
                x: center_x - band / 6.0,
                y,
                width: band / 3.0,
                height,
            });
        }
    }

    Ok(per_series)
}
