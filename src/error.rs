use thiserror::Error;

use crate::clipboard::ClipboardError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
