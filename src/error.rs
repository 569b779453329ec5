use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("chart config has no datasets")]
    EmptyDatasets,

    #[error("dataset {dataset} has {values} values but chart has {labels} labels")]
    LengthMismatch {
        dataset: usize,
        labels: usize,
        values: usize,
    },

    #[error("no chart configuration has been rendered yet")]
    NotConfigured,

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
