//! Error types for shelf-content

/// Result type for shelf-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shelf-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed XML: {message}")]
    Xml { message: String },

    #[error("Failed to serialize shelf document: {message}")]
    Serialize { message: String },
}

impl Error {
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml {
            message: message.into(),
        }
    }

    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize {
            message: message.into(),
        }
    }
}
