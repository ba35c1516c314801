//! Shared test doubles for the collaborator traits

use crate::error::{GalleryError, Result};
use crate::photo::PhotoId;
use crate::surface::{FavoritesBackend, RenderSurface};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Notify;

/// Everything a render surface was asked to do, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Thumbnail(usize, String),
    Preview(usize, String),
    Spinner(bool),
    Badge(String, bool),
    Prefetch(String),
    Notify(String),
    Confirm(String),
}

/// Render surface that records every call.
#[derive(Default)]
pub struct RecordingSurface {
    calls: Mutex<Vec<SurfaceCall>>,
    confirm_answer: Mutex<bool>,
}

impl RecordingSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn answering_confirm(answer: bool) -> Arc<Self> {
        let surface = Self::default();
        *surface.confirm_answer.lock() = answer;
        Arc::new(surface)
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn prefetched(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Prefetch(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Notify(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.lock().push(call);
    }
}

impl RenderSurface for RecordingSurface {
    fn render_thumbnail(&self, index: usize, id: &PhotoId) {
        self.record(SurfaceCall::Thumbnail(index, id.as_str().to_string()));
    }

    fn render_preview(&self, index: usize, id: &PhotoId) {
        self.record(SurfaceCall::Preview(index, id.as_str().to_string()));
    }

    fn set_spinner(&self, active: bool) {
        self.record(SurfaceCall::Spinner(active));
    }

    fn mark_favorite_badge(&self, id: &PhotoId, active: bool) {
        self.record(SurfaceCall::Badge(id.as_str().to_string(), active));
    }

    fn prefetch(&self, id: &PhotoId) {
        self.record(SurfaceCall::Prefetch(id.as_str().to_string()));
    }

    fn notify(&self, message: &str) {
        self.record(SurfaceCall::Notify(message.to_string()));
    }

    fn confirm(&self, message: &str) -> bool {
        self.record(SurfaceCall::Confirm(message.to_string()));
        *self.confirm_answer.lock()
    }
}

/// In-memory favorites backend with call counting, failure injection, and
/// an optional gate that holds add/remove calls in flight until released.
#[derive(Default)]
pub struct FakeBackend {
    stored: Mutex<HashSet<PhotoId>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    failing: Mutex<HashSet<&'static str>>,
    gate: Mutex<Option<Arc<Notify>>>,
    exports: Mutex<Vec<(PathBuf, Vec<PhotoId>)>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_favorites(ids: &[&str]) -> Arc<Self> {
        let backend = Self::default();
        *backend.stored.lock() = ids.iter().map(|i| PhotoId::from(*i)).collect();
        Arc::new(backend)
    }

    /// Make the named operation fail until cleared.
    pub fn fail(&self, op: &'static str) {
        self.failing.lock().insert(op);
    }

    pub fn clear_failures(&self) {
        self.failing.lock().clear();
    }

    /// Hold add/remove calls in flight until the returned handle is notified.
    pub fn hold_mutations(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock() = Some(notify.clone());
        notify
    }

    pub fn call_count(&self, op: &'static str) -> usize {
        self.calls.lock().get(op).copied().unwrap_or(0)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stored.lock().contains(&PhotoId::from(id))
    }

    pub fn stored_count(&self) -> usize {
        self.stored.lock().len()
    }

    pub fn exports(&self) -> Vec<(PathBuf, Vec<PhotoId>)> {
        self.exports.lock().clone()
    }

    fn begin(&self, op: &'static str) -> Result<()> {
        *self.calls.lock().entry(op).or_insert(0) += 1;
        if self.failing.lock().contains(op) {
            return Err(GalleryError::Backend(format!("injected {op} failure")));
        }
        Ok(())
    }

    async fn pass_gate(&self) {
        let gate = self.gate.lock().clone();
        if let Some(notify) = gate {
            notify.notified().await;
        }
    }
}

#[async_trait]
impl FavoritesBackend for FakeBackend {
    async fn add(&self, id: &PhotoId) -> Result<()> {
        self.pass_gate().await;
        self.begin("add")?;
        self.stored.lock().insert(id.clone());
        Ok(())
    }

    async fn remove(&self, id: &PhotoId) -> Result<()> {
        self.pass_gate().await;
        self.begin("remove")?;
        self.stored.lock().remove(id);
        Ok(())
    }

    async fn list(&self) -> Result<HashSet<PhotoId>> {
        self.begin("list")?;
        Ok(self.stored.lock().clone())
    }

    async fn export(&self, destination: &Path, ids: &[PhotoId]) -> Result<()> {
        self.begin("export")?;
        self.exports
            .lock()
            .push((destination.to_path_buf(), ids.to_vec()));
        Ok(())
    }
}

pub fn sequence(names: &[&str]) -> Vec<PhotoId> {
    names.iter().map(|n| PhotoId::from(*n)).collect()
}
