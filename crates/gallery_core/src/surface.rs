//! Collaborator contracts for rendering, prompting, and persistence

use crate::error::Result;
use crate::photo::PhotoId;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;

/// Rendering and user-facing capabilities consumed by the core.
///
/// Calls are issued inline on the event loop, so implementations must not
/// block. Preview rendering completes asynchronously: the surface decodes
/// and displays the image in its own time, then reports back through
/// `GalleryController::preview_loaded` with the index that requested it.
pub trait RenderSurface: Send + Sync {
    /// Render the thumbnail for `id` at grid position `index`.
    fn render_thumbnail(&self, index: usize, id: &PhotoId);

    /// Start rendering the full-screen preview of `id`.
    fn render_preview(&self, index: usize, id: &PhotoId);

    /// Show or hide the preview loading spinner.
    fn set_spinner(&self, active: bool);

    /// Flip the favorite badge on every visual slot showing `id`.
    fn mark_favorite_badge(&self, id: &PhotoId, active: bool);

    /// Fire-and-forget fetch of `id` into the image cache.
    fn prefetch(&self, id: &PhotoId);

    /// Show a toast/alert to the user.
    fn notify(&self, message: &str);

    /// Ask the user to confirm a destructive action.
    fn confirm(&self, message: &str) -> bool;
}

/// Enumerates image files in a directory, in display order.
///
/// An empty result is valid and means "no images found".
pub trait FolderScanner: Send + Sync {
    fn scan(&self, directory: &Path) -> Result<Vec<PhotoId>>;
}

/// External persistence and export service for favorites.
///
/// All calls are asynchronous and may fail independently; there is no
/// transaction across them. The backend is the source of truth for which
/// photos are favorites.
#[async_trait]
pub trait FavoritesBackend: Send + Sync {
    async fn add(&self, id: &PhotoId) -> Result<()>;

    async fn remove(&self, id: &PhotoId) -> Result<()>;

    async fn list(&self) -> Result<HashSet<PhotoId>>;

    /// Export the given favorites to `destination`.
    async fn export(&self, destination: &Path, ids: &[PhotoId]) -> Result<()>;
}
