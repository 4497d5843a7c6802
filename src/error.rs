use thiserror::Error;

#[derive(Debug, Error)]
pub enum StagehandError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StagehandError>;
