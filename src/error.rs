use thiserror::Error;

#[derive(Error, Debug)]
pub enum FusionError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Score Table Error: {0}")]
    Validation(String),
}

pub type FvResult<T> = Result<T, FusionError>;
