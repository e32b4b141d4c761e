//! Error types for draft table generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for draft operations.
pub type DraftResult<T> = Result<T, DraftError>;

/// Errors that can occur while generating a draft table.
#[derive(Debug, Error)]
pub enum DraftError {
    /// Input document missing, unreadable, or not valid UTF-8.
    #[error("Cannot read input '{}': {source}", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output destination not writable.
    #[error("Cannot write output '{}': {source}", path.display())]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON rendering failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DraftError {
    /// Whether the error came from reading the input document.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InputAccess { .. })
    }

    /// Whether the error came from writing the output table.
    pub fn is_output_error(&self) -> bool {
        matches!(self, Self::OutputAccess { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_message() {
        let err = DraftError::InputAccess {
            path: PathBuf::from("notes.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_input_error());
        assert!(!err.is_output_error());
        assert!(err.to_string().contains("notes.txt"));
    }

    #[test]
    fn test_output_error_message() {
        let err = DraftError::OutputAccess {
            path: PathBuf::from("/readonly/draft_wbs.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_output_error());
        assert!(err.to_string().starts_with("Cannot write output"));
    }
}
