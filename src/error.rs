use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("missing required accessor: `{name}`")]
    MissingAccessor { name: &'static str },

    #[error("cannot infer scale: empty dataset")]
    EmptyDataset,

    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
