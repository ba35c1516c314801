//! Copying favorites into an export destination

use crate::{FsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Progress callback invoked after each copied file.
pub type ExportProgress<'a> = &'a mut dyn FnMut(usize);

/// Copy each source file into `destination`, keeping its file name.
///
/// Returns the copied file names in order. Stops at the first failure;
/// files copied before the failure are left in place.
pub fn copy_favorites(
    destination: &Path,
    sources: &[String],
    progress: ExportProgress<'_>,
) -> Result<Vec<String>> {
    if !destination.is_dir() {
        return Err(FsError::NotFound(destination.display().to_string()));
    }

    let mut copied = Vec::with_capacity(sources.len());

    for (counter, source) in sources.iter().enumerate() {
        let source_path = PathBuf::from(source);
        let name = source_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| FsError::InvalidPath(format!("no file name: {source}")))?;

        let target = destination.join(name);
        fs::copy(&source_path, &target)?;
        tracing::debug!(source, target = %target.display(), "favorite exported");

        copied.push(name.to_string());
        progress(counter + 1);
    }

    Ok(copied)
}
