//! Favorite record operations

use crate::{DbError, DbPool, Result};

/// Synchronous favorites store over the connection pool.
#[derive(Clone)]
pub struct FavoritesStore {
    pool: DbPool,
}

impl FavoritesStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a favorite. Adding a path twice is a no-op.
    pub fn add(&self, path: &str) -> Result<()> {
        let conn = self.pool.get().map_err(|e| DbError::Pool(e.to_string()))?;
        conn.execute(
            "INSERT OR IGNORE INTO favourites (path) VALUES (?1)",
            [path],
        )?;
        Ok(())
    }

    /// Remove a favorite. Removing an unknown path is a no-op.
    pub fn remove(&self, path: &str) -> Result<()> {
        let conn = self.pool.get().map_err(|e| DbError::Pool(e.to_string()))?;
        conn.execute("DELETE FROM favourites WHERE path = ?1", [path])?;
        Ok(())
    }

    /// All favorite paths, oldest first.
    pub fn list(&self) -> Result<Vec<String>> {
        let conn = self.pool.get().map_err(|e| DbError::Pool(e.to_string()))?;

        let mut stmt = conn.prepare("SELECT path FROM favourites ORDER BY added_at, path")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut paths = Vec::new();
        for row in rows {
            paths.push(row?);
        }
        Ok(paths)
    }
}
