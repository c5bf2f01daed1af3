//! Error types for shelf-core

use std::path::PathBuf;

/// Result type for shelf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shelf-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file could not be parsed
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Filesystem error from shelf-fs
    #[error(transparent)]
    Fs(#[from] shelf_fs::Error),

    /// Content error from shelf-content
    #[error(transparent)]
    Content(#[from] shelf_content::Error),
}
