/// Error types for game-reviews
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use crate::store::Field;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for game-reviews operations
#[derive(Error, Debug)]
pub enum ReviewError {
    /// A user-supplied value breaks a record rule
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: Field, reason: String },

    /// A review for this title already exists
    #[error("Duplicate title: {0}")]
    DuplicateTitle(String),

    /// The review file exists but could not be understood
    #[error("Corrupt review file {}: {reason}", .path.display())]
    CorruptStore {
        path: PathBuf,
        reason: String,
        /// Where the unreadable file was moved, if it could be moved
        backup: Option<PathBuf>,
    },

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Statistics requested with no reviews
    #[error("No reviews in the store")]
    EmptyStore,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for game-reviews operations
pub type Result<T> = std::result::Result<T, ReviewError>;

impl ReviewError {
    /// Shorthand for building an `InvalidField` error
    pub fn invalid(field: Field, reason: impl Into<String>) -> Self {
        ReviewError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Convert a ReviewError to a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ReviewError::InvalidField { field, reason } => {
                format!("Please enter a valid {}: {}", field, reason)
            }
            ReviewError::DuplicateTitle(title) => {
                format!(
                    "Sorry. A review for '{}' already exists. Pick another title.",
                    title
                )
            }
            ReviewError::CorruptStore {
                path,
                reason,
                backup: Some(backup),
            } => {
                format!(
                    "Could not read saved reviews from {} ({}). Starting with an empty list; \
                     the old file was kept as {}.",
                    path.display(),
                    reason,
                    backup.display()
                )
            }
            ReviewError::CorruptStore {
                path,
                reason,
                backup: None,
            } => {
                format!(
                    "Could not read saved reviews from {} ({}). Starting with an empty list; \
                     the old file will be overwritten on the next save.",
                    path.display(),
                    reason
                )
            }
            ReviewError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            ReviewError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            ReviewError::EmptyStore => {
                "There are no games in the database yet.".to_string()
            }
            ReviewError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = ReviewError::DuplicateTitle("Halo".to_string());
        assert!(err.user_message().contains("Halo"));

        let err = ReviewError::EmptyStore;
        assert!(err.user_message().contains("no games"));

        let err = ReviewError::CorruptStore {
            path: PathBuf::from("reviews.json"),
            reason: "expected value".to_string(),
            backup: None,
        };
        assert!(err.user_message().contains("reviews.json"));
        assert!(err.user_message().contains("overwritten"));

        let err = ReviewError::CorruptStore {
            path: PathBuf::from("reviews.json"),
            reason: "expected value".to_string(),
            backup: Some(PathBuf::from("reviews.json.corrupt")),
        };
        assert!(err.user_message().contains("kept as reviews.json.corrupt"));
    }

    #[test]
    fn test_error_display() {
        let err = ReviewError::invalid(Field::Rating, "must be between 1 and 10");
        let display = format!("{}", err);
        assert_eq!(display, "Invalid rating: must be between 1 and 10");
    }
}
