//! FaveGallery file system collaborators
//!
//! Provides:
//! - Folder scanning for image files (the "folder scanner" collaborator)
//! - Copying favorites into an export destination

mod export;
mod scanner;

pub use export::{copy_favorites, ExportProgress};
pub use scanner::ImageScanner;

use gallery_core::GalleryError;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl FsError {
    /// Convert into the core's error vocabulary.
    pub fn into_gallery(self) -> GalleryError {
        match self {
            FsError::Io(e) => GalleryError::Io(e),
            other => GalleryError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                other.to_string(),
            )),
        }
    }
}

pub type Result<T> = std::result::Result<T, FsError>;
