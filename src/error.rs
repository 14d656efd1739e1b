use mediassist_common::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediAssistError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: HTTP {0}")]
    Status(u16),

    #[error("Invalid doctor data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Common(#[from] mediassist_common::Error),

    #[error("Not a results route: {0}")]
    Route(String),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, MediAssistError>;
