//! FaveGallery - Folder-based photo gallery with persistent favourites
//!
//! Main entry point for the terminal front end.

mod app;

use anyhow::Result;

fn main() -> Result<()> {
    // Initialize logging and panic hook first
    gallery_log::init()?;

    // Clean up old logs (7 days)
    if let Err(e) = gallery_log::cleanup_old_logs(7) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("FaveGallery starting...");

    // Load configuration
    let config = gallery_core::GalleryConfig::load().unwrap_or_default();

    // Run the application
    app::run(config)
}
