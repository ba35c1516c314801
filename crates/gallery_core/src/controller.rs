//! Gallery controller: the composition root of the core
//!
//! Wires the navigation state machine, the preload scheduler, the
//! favorites synchronizer, and the input dispatcher together around one
//! render surface and one favorites backend. The controller owns the
//! photo sequence; navigation and favorites each stay the single writer
//! of their own state.

use crate::command::GalleryCommand;
use crate::config::GalleryConfig;
use crate::error::Result;
use crate::favorites::FavoritesSynchronizer;
use crate::input::{InputDispatcher, InputEvent};
use crate::navigation::NavigationStateMachine;
use crate::photo::{PhotoId, PhotoSequence};
use crate::preload::PreloadScheduler;
use crate::surface::{FavoritesBackend, FolderScanner, RenderSurface};
use std::path::Path;
use std::sync::Arc;

const CLEAR_CONFIRMATION: &str =
    "Are you sure you want to clear all favourites? This action cannot be undone.";

pub struct GalleryController {
    surface: Arc<dyn RenderSurface>,
    navigation: NavigationStateMachine,
    favorites: FavoritesSynchronizer,
    dispatcher: InputDispatcher,
}

impl GalleryController {
    pub fn new(
        surface: Arc<dyn RenderSurface>,
        backend: Arc<dyn FavoritesBackend>,
        config: &GalleryConfig,
    ) -> Self {
        let preloader = PreloadScheduler::with_enabled(surface.clone(), config.preload.enabled);
        Self {
            navigation: NavigationStateMachine::new(surface.clone(), preloader),
            favorites: FavoritesSynchronizer::new(backend, surface.clone()),
            dispatcher: InputDispatcher::new(config.input.swipe_threshold),
            surface,
        }
    }

    /// Load a new photo sequence, replacing the previous session.
    ///
    /// Renders every thumbnail with its favorite badge and resets the
    /// preview to closed.
    pub fn load(&mut self, photos: Vec<PhotoId>) {
        let sequence = PhotoSequence::new(photos);
        tracing::info!(count = sequence.len(), "loading gallery");

        for (index, id) in sequence.iter().enumerate() {
            self.surface.render_thumbnail(index, id);
            self.surface
                .mark_favorite_badge(id, self.favorites.is_favorite(id));
        }
        self.navigation.set_sequence(sequence);
    }

    /// Scan `directory` and load the result. An empty directory loads an
    /// empty, valid gallery. Scan failures are shown to the user and the
    /// previous session is kept.
    pub fn load_directory(
        &mut self,
        scanner: &dyn FolderScanner,
        directory: &Path,
    ) -> Result<usize> {
        match scanner.scan(directory) {
            Ok(photos) => {
                let count = photos.len();
                self.load(photos);
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(?directory, "folder scan failed: {e}");
                self.surface.notify(&e.user_message());
                Err(e)
            }
        }
    }

    /// Fill the favorites cache from the backend and refresh the badges
    /// of any loaded photos. A backend failure is shown to the user and
    /// leaves the gallery usable with an empty cache.
    pub async fn initialize_favorites(&mut self) -> Result<()> {
        match self.favorites.initialize().await {
            Ok(()) => {
                let sequence = self.navigation.sequence().clone();
                for id in sequence.iter() {
                    self.surface
                        .mark_favorite_badge(id, self.favorites.is_favorite(id));
                }
                Ok(())
            }
            Err(e) => {
                self.surface.notify(&e.user_message());
                Err(e)
            }
        }
    }

    /// Translate and execute one raw input event.
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(command) = self.dispatcher.translate(event) {
            self.execute(command);
        }
    }

    pub fn execute(&mut self, command: GalleryCommand) {
        match command {
            GalleryCommand::Open(index) => {
                let _ = self.open_at(index);
            }
            GalleryCommand::Close => self.close(),
            GalleryCommand::Next => self.next(),
            GalleryCommand::Previous => self.previous(),
            GalleryCommand::ToggleFavorite => self.toggle_favorite(),
            GalleryCommand::ToggleFavoriteOf(id) => self.toggle_favorite_of(id),
        }
    }

    pub fn open_at(&mut self, index: usize) -> Result<()> {
        let result = self.navigation.open(index);
        if let Err(e) = &result {
            tracing::debug!("open rejected: {e}");
        }
        result
    }

    pub fn next(&mut self) {
        self.navigation.next();
    }

    pub fn previous(&mut self) {
        self.navigation.previous();
    }

    pub fn close(&mut self) {
        self.navigation.close();
    }

    /// Acknowledge the asynchronous completion of a preview render.
    pub fn preview_loaded(&mut self, index: usize) {
        self.navigation.preview_loaded(index);
    }

    /// Toggle the favorite state of the photo under the preview.
    /// No-op while the preview is closed.
    pub fn toggle_favorite(&mut self) {
        let active = self
            .navigation
            .active_index()
            .and_then(|i| self.navigation.sequence().get(i).cloned());
        if let Some(id) = active {
            self.toggle_favorite_of(id);
        }
    }

    /// Toggle the favorite state of `id`: flip locally right away, settle
    /// with the backend off the event loop.
    pub fn toggle_favorite_of(&mut self, id: PhotoId) {
        let ticket = match self.favorites.begin_toggle(&id) {
            Ok(ticket) => ticket,
            Err(e) => {
                tracing::debug!("toggle rejected: {e}");
                return;
            }
        };

        let favorites = self.favorites.clone();
        let surface = self.surface.clone();
        tokio::spawn(async move {
            if let Err(e) = favorites.settle(ticket).await {
                surface.notify(&e.user_message());
            }
        });
    }

    /// Export the current favorites to `destination`.
    pub async fn export_favorites(&mut self, destination: &Path) -> Result<usize> {
        match self.favorites.export(destination).await {
            Ok(count) => {
                self.surface
                    .notify(&format!("Exported {count} favourites"));
                Ok(count)
            }
            Err(e) => {
                if e.is_rejection() {
                    tracing::debug!("export rejected: {e}");
                } else {
                    self.surface.notify(&e.user_message());
                }
                Err(e)
            }
        }
    }

    /// Clear every favorite after user confirmation.
    pub async fn clear_favorites(&mut self) -> Result<usize> {
        if !self.surface.confirm(CLEAR_CONFIRMATION) {
            return Ok(0);
        }
        match self.favorites.clear().await {
            Ok(cleared) => {
                self.surface.notify(&format!("Cleared {cleared} favourites"));
                Ok(cleared)
            }
            Err(e) => {
                self.surface.notify(&e.user_message());
                Err(e)
            }
        }
    }

    pub fn favorites(&self) -> &FavoritesSynchronizer {
        &self.favorites
    }

    pub fn active_index(&self) -> Option<usize> {
        self.navigation.active_index()
    }

    pub fn is_open(&self) -> bool {
        self.navigation.is_open()
    }

    pub fn photo_count(&self) -> usize {
        self.navigation.sequence().len()
    }

    pub fn photo_at(&self, index: usize) -> Option<&PhotoId> {
        self.navigation.sequence().get(index)
    }
}
