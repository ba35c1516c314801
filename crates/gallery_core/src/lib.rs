//! FaveGallery core domain logic
//!
//! This crate contains:
//! - Preview navigation state machine
//! - Neighbor preload scheduling
//! - Favorites cache with optimistic backend synchronization
//! - Raw input translation
//! - Gallery controller (composition root)
//! - Configuration
//! - Error types
//!
//! Rendering, folder scanning, and favorite persistence are collaborators
//! behind the traits in [`surface`]; the core never touches a window, the
//! file system, or a database itself.

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod favorites;
pub mod input;
pub mod navigation;
pub mod photo;
pub mod preload;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use command::GalleryCommand;
pub use config::{GalleryConfig, InputConfig, PreloadConfig, ScanConfig};
pub use controller::GalleryController;
pub use error::{GalleryError, Result};
pub use favorites::{FavoritesSynchronizer, ToggleTicket};
pub use input::{ClickTarget, InputDispatcher, InputEvent, Key, DEFAULT_SWIPE_THRESHOLD};
pub use navigation::NavigationStateMachine;
pub use photo::{PhotoId, PhotoSequence};
pub use preload::PreloadScheduler;
pub use surface::{FavoritesBackend, FolderScanner, RenderSurface};
