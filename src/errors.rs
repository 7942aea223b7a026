use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("No character class selected for a password of length {length}.")]
    InvalidOptions { length: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardWriteError {
    #[error("no clipboard provider available")]
    Unavailable,

    #[error("clipboard write failed: {0}")]
    Write(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse config file: {0}")]
    Json(#[from] serde_json::Error),
}
