use shared::UnknownRange;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cannot derive a chart domain from an empty dataset")]
    EmptyDataset,

    #[error("Point {index} is out of range for a dataset of {len} points")]
    PointOutOfRange { index: usize, len: usize },

    #[error("Range selection error: {source}")]
    UnknownRange {
        #[from]
        source: UnknownRange,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
