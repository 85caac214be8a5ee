use thiserror::Error;

/// mdlite error types
#[derive(Error, Debug)]
pub enum MdliteError {
    #[error("Directory error: {0}")]
    Directory(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for mdlite operations
pub type Result<T> = std::result::Result<T, MdliteError>;
