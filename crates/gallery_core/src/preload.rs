//! Neighbor preloading
//!
//! Stepping through the preview loads the two wrap-around neighbors of
//! the active photo into the image cache ahead of time. Preloading is a
//! latency optimization only: requests are fire-and-forget, failures stay
//! inside the render surface, and nothing is retried.

use crate::photo::PhotoSequence;
use crate::surface::RenderSurface;
use std::sync::Arc;

pub struct PreloadScheduler {
    surface: Arc<dyn RenderSurface>,
    enabled: bool,
}

impl PreloadScheduler {
    pub fn new(surface: Arc<dyn RenderSurface>) -> Self {
        Self {
            surface,
            enabled: true,
        }
    }

    pub fn with_enabled(surface: Arc<dyn RenderSurface>, enabled: bool) -> Self {
        Self { surface, enabled }
    }

    /// Request both neighbors of `index` into the cache, next first.
    ///
    /// Skipped for sequences of one photo or fewer; for two photos the
    /// neighbors coincide and only one request is issued.
    pub fn schedule(&self, sequence: &PhotoSequence, index: usize) {
        if !self.enabled || sequence.len() <= 1 {
            return;
        }
        let (Some(next), Some(prev)) = (sequence.next_index(index), sequence.previous_index(index))
        else {
            return;
        };

        if let Some(id) = sequence.get(next) {
            self.surface.prefetch(id);
        }
        if prev != next {
            if let Some(id) = sequence.get(prev) {
                self.surface.prefetch(id);
            }
        }
    }
}
