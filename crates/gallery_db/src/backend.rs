//! Async adapter implementing the core's favorites backend
//!
//! rusqlite and file copies are blocking, so every call runs on the tokio
//! blocking pool. Errors cross into the core as `GalleryError::Backend`.

use crate::{DbError, DbPool, FavoritesStore};
use async_trait::async_trait;
use gallery_core::{FavoritesBackend, GalleryError, PhotoId};
use std::collections::HashSet;
use std::path::Path;

pub struct SqliteFavorites {
    store: FavoritesStore,
}

impl SqliteFavorites {
    pub fn new(pool: DbPool) -> Self {
        Self {
            store: FavoritesStore::new(pool),
        }
    }

    async fn run<T, F>(&self, op: F) -> gallery_core::Result<T>
    where
        T: Send + 'static,
        F: FnOnce(FavoritesStore) -> crate::Result<T> + Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || op(store))
            .await
            .map_err(|e| GalleryError::Backend(format!("database task failed: {e}")))?
            .map_err(db_error)
    }
}

fn db_error(e: DbError) -> GalleryError {
    GalleryError::Backend(e.to_string())
}

#[async_trait]
impl FavoritesBackend for SqliteFavorites {
    async fn add(&self, id: &PhotoId) -> gallery_core::Result<()> {
        let path = id.as_str().to_string();
        self.run(move |store| store.add(&path)).await
    }

    async fn remove(&self, id: &PhotoId) -> gallery_core::Result<()> {
        let path = id.as_str().to_string();
        self.run(move |store| store.remove(&path)).await
    }

    async fn list(&self) -> gallery_core::Result<HashSet<PhotoId>> {
        self.run(|store| store.list())
            .await
            .map(|paths| paths.into_iter().map(PhotoId::from).collect())
    }

    async fn export(&self, destination: &Path, ids: &[PhotoId]) -> gallery_core::Result<()> {
        let destination = destination.to_path_buf();
        let sources: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();
        let total = sources.len();

        tokio::task::spawn_blocking(move || {
            gallery_fs::copy_favorites(&destination, &sources, &mut |copied| {
                tracing::debug!(copied, total, "export progress");
            })
        })
        .await
        .map_err(|e| GalleryError::Backend(format!("export task failed: {e}")))?
        .map_err(|e| GalleryError::Backend(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{migrate, pool::init_pool};
    use std::fs::File;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn backend() -> (SqliteFavorites, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let pool = init_pool(temp_file.path()).unwrap();
        migrate(&pool).unwrap();
        (SqliteFavorites::new(pool), temp_file)
    }

    #[tokio::test]
    async fn add_list_remove_through_the_trait() {
        let (backend, _db) = backend();
        let id = PhotoId::from("/photos/a.jpg");

        backend.add(&id).await.unwrap();
        assert!(backend.list().await.unwrap().contains(&id));

        backend.remove(&id).await.unwrap();
        assert!(backend.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn export_copies_favorites_into_the_destination() {
        let (backend, _db) = backend();
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();

        let photo = src.path().join("a.jpg");
        File::create(&photo).unwrap().write_all(b"pixels").unwrap();
        let ids = vec![PhotoId::from(photo.display().to_string())];

        backend.export(dst.path(), &ids).await.unwrap();
        assert!(dst.path().join("a.jpg").exists());
    }

    #[tokio::test]
    async fn export_to_a_missing_destination_fails() {
        let (backend, _db) = backend();
        let err = backend
            .export(Path::new("/no/such/dir"), &[PhotoId::from("a.jpg")])
            .await
            .unwrap_err();
        assert!(matches!(err, GalleryError::Backend(_)));
    }
}
