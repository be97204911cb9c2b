use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Splitter error: {0}")]
    SplitterError(#[from] funcharvest_splitter::SplitterError),

    #[error("Store serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Invalid repository path: {0}")]
    InvalidPath(String),

    #[error("{0}")]
    Other(String),
}
