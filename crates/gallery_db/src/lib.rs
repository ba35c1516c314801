//! FaveGallery favorites persistence
//!
//! SQLite-backed implementation of the core's `FavoritesBackend`:
//! favorite paths in a single table, exports copied onto the file system.

mod backend;
mod favorites;
mod pool;
mod schema;

pub use backend::SqliteFavorites;
pub use favorites::FavoritesStore;
pub use pool::{init_pool, DbPool};
pub use schema::migrate;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Database errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DbError>;

/// Get the database directory
pub fn db_dir() -> PathBuf {
    ProjectDirs::from("com", "FaveGallery", "FaveGallery")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

/// Open the favorites database, creating and migrating it as needed.
pub fn init() -> Result<DbPool> {
    let db_path = db_dir();
    std::fs::create_dir_all(&db_path)?;

    let pool = pool::init_pool(&db_path.join("favourites.db"))?;
    migrate(&pool)?;

    tracing::info!("Database initialized at {:?}", db_path);
    Ok(pool)
}
