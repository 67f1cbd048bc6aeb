use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Clipboard rejected write: {0}")]
    ClipboardRejected(String),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Element not found: {0}")]
    ElementNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
