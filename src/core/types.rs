use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One labeled category holding a value per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub values: Vec<f64>,
}

impl Row {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Sum of all series values, used as the row height by stacked charts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Input table: ordered rows plus an optional series legend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub rows: Vec<Row>,
    #[serde(default)]
    pub legend: Vec<String>,
}

/// Row and series counts of a dataset that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetShape {
    pub rows: usize,
    pub series: usize,
}

impl DatasetShape {
    /// Measures `rows`, failing fast on empty, ragged or non-finite input.
    pub fn of_rows(rows: &[Row]) -> ChartResult<Self> {
        let first = rows.first().ok_or(ChartError::EmptyDataset)?;
        let series = first.values.len();
        if series == 0 {
            return Err(ChartError::InvalidData(
                "rows must carry at least one value".to_owned(),
            ));
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.values.len() != series {
                return Err(ChartError::RaggedRows {
                    row: row_index,
                    expected: series,
                    found: row.values.len(),
                });
            }
            if let Some(series_index) = row.values.iter().position(|value| !value.is_finite()) {
                return Err(ChartError::NonFiniteValue {
                    row: row_index,
                    series: series_index,
                });
            }
        }

        Ok(Self {
            rows: rows.len(),
            series,
        })
    }
}

impl ChartData {
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            legend: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_legend<I, S>(mut self, legend: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legend = legend.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn has_legend(&self) -> bool {
        !self.legend.is_empty()
    }

    /// Checks the rectangular-table contract every renderer relies on.
    ///
    /// Rows must be non-empty and equally sized, values finite, and a
    /// non-empty legend must name exactly one label per series.
    pub fn validate(&self) -> ChartResult<DatasetShape> {
        let shape = DatasetShape::of_rows(&self.rows)?;
        if self.has_legend() && self.legend.len() != shape.series {
            return Err(ChartError::LegendMismatch {
                legend: self.legend.len(),
                series: shape.series,
            });
        }
        Ok(shape)
    }

    /// Largest single value across all rows and series.
    ///
    /// Returns `None` for an empty table.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.rows
            .iter()
            .flat_map(|row| row.values.iter().copied())
            .map(OrderedFloat)
            .max()
            .map(OrderedFloat::into_inner)
    }

    /// Largest per-row sum, the scale driver for stacked charts.
    #[must_use]
    pub fn max_row_total(&self) -> Option<f64> {
        self.rows
            .iter()
            .map(|row| OrderedFloat(row.total()))
            .max()
            .map(OrderedFloat::into_inner)
    }
}

/// Tooltip text for one cell.
///
/// Combines the row label, the series label when a legend exists, and the
/// compactly formatted value. Returns `None` when the cell does not exist.
#[must_use]
pub fn cell_title(
    rows: &[Row],
    legend: &[String],
    row: usize,
    series: usize,
) -> Option<String> {
    let row = rows.get(row)?;
    let value = crate::render::format_number(*row.values.get(series)?);
    let label = &row.label;
    Some(match legend.get(series) {
        Some(series_label) => format!("{label}, {series_label}: {value}"),
        None => format!("{label}: {value}"),
    })
}

/// Point in chart pixel space (Y grows downward from the canvas top).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PlotPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_ragged_row_index() {
        let data = ChartData::new(vec![
            Row::new("a", vec![1.0, 2.0]),
            Row::new("b", vec![1.0]),
        ]);
        match data.validate() {
            Err(ChartError::RaggedRows {
                row,
                expected,
                found,
            }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected validation result: {other:?}"),
        }
    }

    #[test]
    fn maxima_follow_flat_and_stacked_rules() {
        let data = ChartData::new(vec![
            Row::new("a", vec![3.0, 5.0]),
            Row::new("b", vec![6.0, 1.0]),
        ]);
        assert_eq!(data.max_value(), Some(6.0));
        assert_eq!(data.max_row_total(), Some(8.0));
        assert_eq!(ChartData::default().max_value(), None);
    }

    #[test]
    fn cell_title_includes_series_label_only_with_legend() {
        let rows = vec![Row::new("R", vec![2.5])];
        assert_eq!(cell_title(&rows, &[], 0, 0).as_deref(), Some("R: 2.5"));
        assert_eq!(
            cell_title(&rows, &["X".to_owned()], 0, 0).as_deref(),
            Some("R, X: 2.5")
        );
    }

    #[test]
    fn cell_title_is_none_outside_the_table() {
        let rows = vec![Row::new("R", vec![2.5])];
        assert_eq!(cell_title(&rows, &[], 1, 0), None);
        assert_eq!(cell_title(&rows, &[], 0, 1), None);
        assert_eq!(cell_title(&[], &[], 0, 0), None);
    }
}
