use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unparsable timestamp: {0}")]
    Timestamp(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GatewatchError>;
