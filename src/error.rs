use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("empty dataset: at least one row is required")]
    EmptyDataset,

    #[error("ragged rows: row {row} has {found} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("legend has {legend} labels but rows carry {series} series")]
    LegendMismatch { legend: usize, series: usize },

    #[error("value at row {row}, series {series} must be finite")]
    NonFiniteValue { row: usize, series: usize },

    #[error("invalid renderer config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
