//! Photo identity and the loaded photo sequence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Opaque identifier for one image within a loaded gallery session.
///
/// In practice this is the file path reported by the folder scanner. Ids
/// are treated as unique within one loaded sequence; duplicate paths
/// collapse to a single favorite entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An id with no visible content cannot name a photo.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for PhotoId {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// Ordered, fixed-length sequence of photos for one gallery session.
///
/// Created on load, replaced wholesale by the next load, never mutated in
/// place. Cloning shares the underlying storage.
#[derive(Debug, Clone)]
pub struct PhotoSequence {
    photos: Arc<[PhotoId]>,
}

impl PhotoSequence {
    pub fn new(photos: Vec<PhotoId>) -> Self {
        Self {
            photos: photos.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PhotoId> {
        self.photos.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhotoId> {
        self.photos.iter()
    }

    /// Index after `index`, wrapping at the end of the sequence.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let n = self.photos.len();
        if n == 0 || index >= n {
            return None;
        }
        Some((index + 1) % n)
    }

    /// Index before `index`, wrapping at the start of the sequence.
    pub fn previous_index(&self, index: usize) -> Option<usize> {
        let n = self.photos.len();
        if n == 0 || index >= n {
            return None;
        }
        Some((index + n - 1) % n)
    }
}

impl Default for PhotoSequence {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(names: &[&str]) -> PhotoSequence {
        PhotoSequence::new(names.iter().map(|n| PhotoId::from(*n)).collect())
    }

    #[test]
    fn blank_ids_are_detected() {
        assert!(PhotoId::new("").is_blank());
        assert!(PhotoId::new("   ").is_blank());
        assert!(!PhotoId::new("a.jpg").is_blank());
    }

    #[test]
    fn neighbor_indices_wrap_around() {
        let seq = sequence(&["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(seq.next_index(0), Some(1));
        assert_eq!(seq.next_index(2), Some(0));
        assert_eq!(seq.previous_index(0), Some(2));
        assert_eq!(seq.previous_index(1), Some(0));
    }

    #[test]
    fn neighbors_of_empty_or_out_of_range_are_none() {
        let empty = PhotoSequence::default();
        assert_eq!(empty.next_index(0), None);
        assert_eq!(empty.previous_index(0), None);

        let seq = sequence(&["a.jpg"]);
        assert_eq!(seq.next_index(1), None);
        assert_eq!(seq.previous_index(5), None);
    }

    #[test]
    fn single_photo_wraps_to_itself() {
        let seq = sequence(&["a.jpg"]);
        assert_eq!(seq.next_index(0), Some(0));
        assert_eq!(seq.previous_index(0), Some(0));
    }
}
