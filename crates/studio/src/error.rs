//! Error types for the studio editors.

use thiserror::Error;

/// Errors raised while configuring editors or installing the session logger.
///
/// Editor operations themselves never fail; hand-edited text falls back to
/// documented defaults instead.
#[derive(Debug, Error)]
pub enum StudioError {
    #[error("invalid editor config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown border style: {0}")]
    UnknownBorderStyle(String),

    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, StudioError>;
