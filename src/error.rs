//! Error types for the Pentaprint fingerprinting library.

use thiserror::Error;

/// The main error type for Pentaprint operations.
#[derive(Error, Debug)]
pub enum PentaprintError {
    /// Invalid input supplied to an operation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Pentaprint operations.
pub type Result<T> = std::result::Result<T, PentaprintError>;

impl From<serde_json::Error> for PentaprintError {
    fn from(err: serde_json::Error) -> Self {
        PentaprintError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PentaprintError::InvalidInput("bad".to_string());
        assert_eq!(err.to_string(), "Invalid input: bad");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PentaprintError = io.into();
        assert!(matches!(err, PentaprintError::Io(_)));
    }
}
