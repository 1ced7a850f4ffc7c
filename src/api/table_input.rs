use tracing::debug;

use crate::core::{ChartData, Row};
use crate::error::{ChartError, ChartResult};

impl ChartData {
    /// Parses delimited text such as CSV into a dataset.
    ///
    /// With `has_header`, the first non-blank line names the label column
    /// followed by one legend entry per series. Every other non-blank line is
    /// a row label followed by its values. Quoting is not supported.
    pub fn from_delimited_str(input: &str, delimiter: char, has_header: bool) -> ChartResult<Self> {
        let mut lines = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let mut legend = Vec::new();
        if has_header {
            if let Some((_, header)) = lines.next() {
                legend = split_cells(header, delimiter)
                    .skip(1)
                    .map(str::to_owned)
                    .collect();
            }
        }

        let mut rows = Vec::new();
        for (index, line) in lines {
            let mut cells = split_cells(line, delimiter);
            let label = cells.next().unwrap_or_default().to_owned();
            let values = cells
                .map(|cell| {
                    cell.parse::<f64>().map_err(|e| {
                        ChartError::InvalidData(format!(
                            "line {}: cannot parse `{cell}` as a number: {e}",
                            index + 1
                        ))
                    })
                })
                .collect::<ChartResult<Vec<_>>>()?;
            rows.push(Row::new(label, values));
        }

        if legend.iter().all(String::is_empty) {
            legend.clear();
        }
        debug!(rows = rows.len(), legend = legend.len(), "parsed delimited table");
        Ok(Self { rows, legend })
    }

    /// Parses the JSON shape `{"rows": [{"label": .., "values": [..]}], "legend": [..]}`.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset json: {e}")))
    }
}

fn split_cells(line: &str, delimiter: char) -> impl Iterator<Item = &str> {
    line.split(delimiter).map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_becomes_legend() {
        let data = ChartData::from_delimited_str("year,apples,pears\n2020,1,2\n2021,3,4\n", ',', true)
            .expect("parse");
        assert_eq!(data.legend, vec!["apples", "pears"]);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[1], Row::new("2021", vec![3.0, 4.0]));
    }

    #[test]
    fn blank_header_cells_mean_no_legend() {
        let data = ChartData::from_delimited_str("label,\nA,1\n", ',', true).expect("parse");
        assert!(data.legend.is_empty());
    }

    #[test]
    fn headerless_input_keeps_every_line() {
        let data = ChartData::from_delimited_str("A;1\r\n\nB;2\r\n", ';', false).expect("parse");
        assert!(data.legend.is_empty());
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0].values, vec![1.0]);
    }

    #[test]
    fn unparsable_cell_reports_line() {
        let err = ChartData::from_delimited_str("h,x\nA,oops\n", ',', true).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}
