use thiserror::Error;

pub type Result<T> = std::result::Result<T, LtError>;

#[derive(Debug, Error)]
pub enum LtError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
