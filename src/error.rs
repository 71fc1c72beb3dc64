//! Error types for the dockdockgo front end.

use dockdockgo_search::SearchError;

/// Top-level error type for the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Search client error.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
