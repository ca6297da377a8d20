use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Local storage unavailable")]
    StorageUnavailable,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
