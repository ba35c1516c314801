//! Favorites cache synchronized with the persistence backend
//!
//! The local set is updated optimistically: the badge flips before the
//! backend confirms, and a failed call rolls the cache back before the
//! user is told anything. At most one update per photo may be in flight;
//! a second toggle on the same id while the first is pending is rejected
//! outright rather than queued.

use crate::error::{GalleryError, Result};
use crate::photo::PhotoId;
use crate::surface::{FavoritesBackend, RenderSurface};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

/// Per-id synchronization state for the optimistic update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncState {
    /// Local membership matches the last confirmed backend state.
    Synced,
    /// A backend call is in flight; local membership is optimistic.
    Pending,
}

/// A toggle that has been applied locally but not yet settled with the
/// backend. Obtained from `begin_toggle`, consumed by `settle`.
#[derive(Debug)]
#[must_use = "an unsettled toggle leaves its photo permanently pending"]
pub struct ToggleTicket {
    id: PhotoId,
    was_favorite: bool,
}

impl ToggleTicket {
    pub fn id(&self) -> &PhotoId {
        &self.id
    }
}

#[derive(Default)]
struct FavoritesState {
    favorites: HashSet<PhotoId>,
    sync: HashMap<PhotoId, SyncState>,
}

impl FavoritesState {
    fn sync_state(&self, id: &PhotoId) -> SyncState {
        self.sync.get(id).copied().unwrap_or(SyncState::Synced)
    }

    /// Synced -> Pending, flipping membership optimistically.
    /// Returns the membership before the flip.
    fn begin(&mut self, id: &PhotoId) -> Result<bool> {
        if self.sync_state(id) == SyncState::Pending {
            return Err(GalleryError::OperationInProgress(id.clone()));
        }
        let was_favorite = self.favorites.contains(id);
        if was_favorite {
            self.favorites.remove(id);
        } else {
            self.favorites.insert(id.clone());
        }
        self.sync.insert(id.clone(), SyncState::Pending);
        Ok(was_favorite)
    }

    /// Pending -> Synced: the optimistic membership is now backend truth.
    fn commit(&mut self, id: &PhotoId) {
        self.sync.remove(id);
    }

    /// Pending -> Synced with the optimistic flip undone.
    fn rollback(&mut self, id: &PhotoId, was_favorite: bool) {
        if was_favorite {
            self.favorites.insert(id.clone());
        } else {
            self.favorites.remove(id);
        }
        self.sync.remove(id);
    }
}

/// Owns the local favorite-membership cache and reconciles it with the
/// backend. Cloning is cheap and shares the cache, so a settle can stay
/// in flight while the event loop keeps handling input.
#[derive(Clone)]
pub struct FavoritesSynchronizer {
    inner: Arc<Inner>,
}

struct Inner {
    backend: Arc<dyn FavoritesBackend>,
    surface: Arc<dyn RenderSurface>,
    state: Mutex<FavoritesState>,
}

impl FavoritesSynchronizer {
    pub fn new(backend: Arc<dyn FavoritesBackend>, surface: Arc<dyn RenderSurface>) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                surface,
                state: Mutex::new(FavoritesState::default()),
            }),
        }
    }

    /// Replace the local cache with the backend's persisted set.
    ///
    /// On failure the cache is left empty and the error is returned; the
    /// gallery stays usable without loaded favorites.
    pub async fn initialize(&self) -> Result<()> {
        match self.inner.backend.list().await {
            Ok(ids) => {
                tracing::info!(count = ids.len(), "favorites loaded");
                self.inner.state.lock().favorites = ids;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("failed to load favorites: {e}");
                Err(e)
            }
        }
    }

    /// Local membership read. Never calls the backend; ids never seen
    /// are simply not favorites yet.
    pub fn is_favorite(&self, id: &PhotoId) -> bool {
        self.inner.state.lock().favorites.contains(id)
    }

    /// Sorted snapshot of the current favorite ids.
    pub fn favorite_ids(&self) -> Vec<PhotoId> {
        let mut ids: Vec<PhotoId> = self.inner.state.lock().favorites.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn count(&self) -> usize {
        self.inner.state.lock().favorites.len()
    }

    /// Apply a toggle locally and flip the badge, without waiting for the
    /// backend. The returned ticket must be passed to `settle`.
    pub fn begin_toggle(&self, id: &PhotoId) -> Result<ToggleTicket> {
        if id.is_blank() {
            return Err(GalleryError::InvalidArgument("photo id is blank".into()));
        }
        let was_favorite = self.inner.state.lock().begin(id)?;
        // The badge flips before the backend confirms; perceived latency
        // of a toggle is zero.
        self.inner.surface.mark_favorite_badge(id, !was_favorite);
        Ok(ToggleTicket {
            id: id.clone(),
            was_favorite,
        })
    }

    /// Confirm an optimistic toggle with the backend.
    ///
    /// On failure the cache is rolled back and the badge reverted before
    /// the error is returned, so the UI never keeps a state the backend
    /// rejected. Returns the settled membership.
    pub async fn settle(&self, ticket: ToggleTicket) -> Result<bool> {
        let ToggleTicket { id, was_favorite } = ticket;
        let call = if was_favorite {
            self.inner.backend.remove(&id)
        } else {
            self.inner.backend.add(&id)
        };

        match call.await {
            Ok(()) => {
                self.inner.state.lock().commit(&id);
                tracing::debug!(%id, favorite = !was_favorite, "favorite settled");
                Ok(!was_favorite)
            }
            Err(e) => {
                self.inner.state.lock().rollback(&id, was_favorite);
                self.inner.surface.mark_favorite_badge(&id, was_favorite);
                tracing::warn!(%id, "favorite toggle rolled back: {e}");
                Err(e)
            }
        }
    }

    /// Toggle and wait for the backend in one call.
    pub async fn toggle(&self, id: &PhotoId) -> Result<bool> {
        let ticket = self.begin_toggle(id)?;
        self.settle(ticket).await
    }

    /// Export the current favorites through the backend. The local set is
    /// never mutated by an export. Returns how many ids were exported.
    pub async fn export(&self, destination: &Path) -> Result<usize> {
        if destination.as_os_str().is_empty() {
            return Err(GalleryError::InvalidArgument(
                "export destination is empty".into(),
            ));
        }
        let ids = self.favorite_ids();
        self.inner.backend.export(destination, &ids).await?;
        Ok(ids.len())
    }

    /// Remove every favorite through the backend, one id at a time.
    ///
    /// Ids whose removal fails (or is already pending) stay favorites.
    /// Returns how many were cleared, or the first error after all ids
    /// have been attempted.
    pub async fn clear(&self) -> Result<usize> {
        let ids = self.favorite_ids();
        let mut cleared = 0;
        let mut first_error = None;

        for id in ids {
            match self.toggle(&id).await {
                Ok(_) => cleared += 1,
                Err(e) => {
                    tracing::warn!(%id, "favorite not cleared: {e}");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            None => Ok(cleared),
            Some(e) => {
                tracing::warn!(cleared, "clear finished with failures");
                Err(e)
            }
        }
    }
}
