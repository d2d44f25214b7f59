// SPDX-License-Identifier: GPL-3.0-only

//! Session photo store
//!
//! Append-only ordered collection of finished photos for the active
//! session. Insertion order is capture order. The store has exactly one
//! mutator (`append`) and one destructor (`clear`); photos themselves
//! are immutable once created.

use crate::pipeline::EncodingFormat;

/// An encoded still image with its 1-based position in the session
#[derive(Clone, PartialEq, Eq)]
pub struct CapturedPhoto {
    /// 1-based index within the session
    pub index: u32,
    /// Source frame width before encoding
    pub width: u32,
    /// Source frame height before encoding
    pub height: u32,
    /// Encoding of `data`
    pub format: EncodingFormat,
    /// Compressed image bytes
    pub data: Vec<u8>,
}

impl std::fmt::Debug for CapturedPhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CapturedPhoto(#{}, {}x{}, {:?}, {} bytes)",
            self.index,
            self.width,
            self.height,
            self.format,
            self.data.len()
        )
    }
}

/// Ordered collection of the session's finished photos
#[derive(Debug, Default)]
pub struct SessionStore {
    photos: Vec<CapturedPhoto>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished photo. Capture order is insertion order.
    pub fn append(&mut self, photo: CapturedPhoto) {
        self.photos.push(photo);
    }

    /// Remove all photos (session reset)
    pub fn clear(&mut self) {
        self.photos.clear();
    }

    pub fn count(&self) -> u32 {
        self.photos.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Borrow the photos in capture order
    pub fn photos(&self) -> &[CapturedPhoto] {
        &self.photos
    }

    /// Owned snapshot for display/export
    pub fn snapshot(&self) -> Vec<CapturedPhoto> {
        self.photos.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(index: u32) -> CapturedPhoto {
        CapturedPhoto {
            index,
            width: 4,
            height: 4,
            format: EncodingFormat::Png,
            data: vec![index as u8],
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = SessionStore::new();
        store.append(photo(1));
        store.append(photo(2));
        store.append(photo(3));

        assert_eq!(store.count(), 3);
        let indices: Vec<u32> = store.photos().iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = SessionStore::new();
        store.append(photo(1));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut store = SessionStore::new();
        store.append(photo(1));
        let snap = store.snapshot();
        store.clear();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].index, 1);
    }
}
