//! Image folder scanning

use crate::{FsError, Result};
use gallery_core::{FolderScanner, PhotoId};
use std::fs;
use std::path::Path;

/// Scans a directory for image files by extension.
///
/// Scanning is non-recursive and returns file paths sorted by name so a
/// rescan of the same folder yields the same sequence. Entries that
/// cannot be read are skipped with a logged diagnostic; an empty result
/// is valid and means "no images found".
pub struct ImageScanner {
    extensions: Vec<String>,
}

impl ImageScanner {
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    pub fn scan_directory(&self, directory: &Path) -> Result<Vec<String>> {
        if !directory.exists() {
            return Err(FsError::NotFound(directory.display().to_string()));
        }
        if !directory.is_dir() {
            return Err(FsError::InvalidPath(format!(
                "Not a directory: {}",
                directory.display()
            )));
        }

        let mut result = Vec::new();

        for entry in fs::read_dir(directory)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };

            let path = entry.path();
            if path.is_dir() {
                continue;
            }

            let Some(extension) = path.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            if self.extensions.contains(&extension.to_lowercase()) {
                result.push(path.display().to_string());
            }
        }

        result.sort();
        tracing::debug!(count = result.len(), ?directory, "folder scanned");
        Ok(result)
    }
}

impl FolderScanner for ImageScanner {
    fn scan(&self, directory: &Path) -> gallery_core::Result<Vec<PhotoId>> {
        self.scan_directory(directory)
            .map(|paths| paths.into_iter().map(PhotoId::from).collect())
            .map_err(FsError::into_gallery)
    }
}
