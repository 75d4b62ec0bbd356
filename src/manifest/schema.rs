//! Manifest types
//!
//! A manifest is a JSON object keyed by sprite name. Each value is an object
//! with optional numeric `x`, `y`, `width` and `height` fields:
//!
//! ```json
//! {
//!     "coin": { "x": 0, "y": 0, "width": 16, "height": 16 },
//!     "heart": { "x": 16, "width": 16, "height": 16 }
//! }
//! ```
//!
//! Unknown fields inside an entry are ignored.

use ahash::AHashMap;

use crate::core::types::SpriteRect;

/// One named rectangle from the manifest
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteManifestEntry {
    pub name: String,
    pub rect: SpriteRect,
}

/// Decoded manifest: sprite name to (possibly partial) rectangle
///
/// The backing map has no meaningful iteration order. Use
/// [`SpriteManifest::into_sorted_entries`] for anything order-dependent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteManifest {
    entries: AHashMap<String, SpriteRect>,
}

impl SpriteManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the rect previously stored under `name`
    pub fn insert(&mut self, name: impl Into<String>, rect: SpriteRect) -> Option<SpriteRect> {
        self.entries.insert(name.into(), rect)
    }

    pub fn get(&self, name: &str) -> Option<&SpriteRect> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by name, ascending byte-wise.
    pub fn into_sorted_entries(self) -> Vec<SpriteManifestEntry> {
        let mut entries: Vec<SpriteManifestEntry> = self
            .entries
            .into_iter()
            .map(|(name, rect)| SpriteManifestEntry { name, rect })
            .collect();
        // Names are unique keys, so an unstable sort is still total and deterministic
        entries.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

impl FromIterator<(String, SpriteRect)> for SpriteManifest {
    fn from_iter<I: IntoIterator<Item = (String, SpriteRect)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
