use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttendError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Access denied: {0}")]
    Authorization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),
}

pub type AttendResult<T> = Result<T, AttendError>;
