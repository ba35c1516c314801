//! Gallery error types

use crate::photo::PhotoId;
use thiserror::Error;

/// Main gallery error type
#[derive(Error, Debug)]
pub enum GalleryError {
    // ===== Local rejections (logged diagnostic, no state was mutated) =====
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index {index} out of range for {len} photos")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("A favorites update for {0} is already in flight")]
    OperationInProgress(PhotoId),

    // ===== Collaborator failures (notify user, continue) =====
    #[error("Favorites backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GalleryError {
    /// Local rejection of a core operation: nothing was mutated, so there
    /// is nothing to roll back and nothing to show the user.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GalleryError::InvalidArgument(_)
                | GalleryError::IndexOutOfRange { .. }
                | GalleryError::OperationInProgress(_)
        )
    }

    /// Get a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            GalleryError::Backend(msg) => format!("Favorites could not be saved: {}", msg),
            GalleryError::Io(e) => format!("File operation failed: {}", e),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
