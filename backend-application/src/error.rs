use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown location: {0}")]
    UnknownLocation(String),
    #[error("invalid request: {0}")]
    Validation(String),
    #[error(transparent)]
    Persistence(#[from] anyhow::Error),
}
