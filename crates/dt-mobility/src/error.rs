use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("malformed potential-field row: {0}")]
    MalformedRow(String),

    #[error("failed to read potential-field source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse Gaussian external-map source: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
