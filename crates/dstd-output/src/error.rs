use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("failed to write json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
