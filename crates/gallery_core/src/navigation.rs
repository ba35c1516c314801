//! Preview navigation state machine
//!
//! Owns the active index and the open/closed state of the full-screen
//! preview. Every successful transition fires the same side-effect
//! sequence: spinner on, preview render request, neighbor preload.
//! Preview rendering completes asynchronously; completions are keyed by
//! the index that requested them, so a slow load superseded by a newer
//! navigation never clears the spinner for a photo the user has left.

use crate::error::{GalleryError, Result};
use crate::photo::PhotoSequence;
use crate::preload::PreloadScheduler;
use crate::surface::RenderSurface;
use std::sync::Arc;

/// Navigation state machine for the preview overlay.
///
/// Single writer of the active index; the photo sequence is read-shared.
pub struct NavigationStateMachine {
    sequence: PhotoSequence,
    active: Option<usize>,
    surface: Arc<dyn RenderSurface>,
    preloader: PreloadScheduler,
}

impl NavigationStateMachine {
    pub fn new(surface: Arc<dyn RenderSurface>, preloader: PreloadScheduler) -> Self {
        Self {
            sequence: PhotoSequence::default(),
            active: None,
            surface,
            preloader,
        }
    }

    /// Replace the photo sequence, closing any open preview.
    pub fn set_sequence(&mut self, sequence: PhotoSequence) {
        self.close();
        self.sequence = sequence;
    }

    pub fn sequence(&self) -> &PhotoSequence {
        &self.sequence
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Open the preview on the photo at `index`.
    ///
    /// Fails with `IndexOutOfRange` and leaves the state unchanged when
    /// `index` does not name a photo in the current sequence.
    pub fn open(&mut self, index: usize) -> Result<()> {
        let len = self.sequence.len();
        if index >= len {
            return Err(GalleryError::IndexOutOfRange { index, len });
        }
        self.show(index);
        Ok(())
    }

    /// Close the preview. No-op when already closed.
    pub fn close(&mut self) {
        if self.active.take().is_some() {
            self.surface.set_spinner(false);
        }
    }

    /// Step to the next photo, wrapping at the end of the sequence.
    /// Silently ignored when the preview is closed or the sequence is empty.
    pub fn next(&mut self) {
        if let Some(next) = self.active.and_then(|i| self.sequence.next_index(i)) {
            self.show(next);
        }
    }

    /// Step to the previous photo, wrapping at the start of the sequence.
    /// Silently ignored when the preview is closed or the sequence is empty.
    pub fn previous(&mut self) {
        if let Some(prev) = self.active.and_then(|i| self.sequence.previous_index(i)) {
            self.show(prev);
        }
    }

    /// Acknowledge the asynchronous completion of a preview render.
    ///
    /// Only a completion for the photo currently under the preview clears
    /// the spinner; stale completions are discarded by index mismatch.
    pub fn preview_loaded(&mut self, index: usize) {
        if self.active == Some(index) {
            self.surface.set_spinner(false);
        } else {
            tracing::debug!(index, active = ?self.active, "discarding stale preview completion");
        }
    }

    fn show(&mut self, index: usize) {
        self.active = Some(index);
        self.surface.set_spinner(true);
        if let Some(id) = self.sequence.get(index) {
            self.surface.render_preview(index, id);
        }
        self.preloader.schedule(&self.sequence, index);
    }
}
