use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("dataset length mismatch: {values} values vs {labels} labels")]
    DatasetLengthMismatch { values: usize, labels: usize },

    #[error("bar index {index} out of bounds for series of length {len}")]
    BarIndexOutOfBounds { index: usize, len: usize },

    #[error("chart is not mounted")]
    NotMounted,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
