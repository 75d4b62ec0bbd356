//! Catalog output types

use image::RgbaImage;

use crate::core::types::NormalizedRect;

/// One extracted sprite: its manifest name and an owned RGBA copy of its pixels
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteRecord {
    name: String,
    image: RgbaImage,
}

impl SpriteRecord {
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn into_parts(self) -> (String, RgbaImage) {
        (self.name, self.image)
    }
}

/// A manifest entry left out of the catalog under `FailurePolicy::SkipInvalid`
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    pub name: String,
    pub rect: NormalizedRect,
}

/// Sprites ordered by ascending name
///
/// Built once per (manifest, atlas) pair and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteCatalog {
    records: Vec<SpriteRecord>,
    skipped: Vec<SkippedEntry>,
}

impl SpriteCatalog {
    /// Callers must pass records already sorted by name.
    pub(crate) fn new(records: Vec<SpriteRecord>, skipped: Vec<SkippedEntry>) -> Self {
        debug_assert!(records.windows(2).all(|w| w[0].name < w[1].name));
        Self { records, skipped }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpriteRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[SpriteRecord] {
        &self.records
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name())
    }

    /// Look up a sprite by exact name.
    pub fn get(&self, name: &str) -> Option<&SpriteRecord> {
        self.records
            .binary_search_by(|r| r.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.records[i])
    }

    /// Entries dropped by the skip-invalid policy, in name order.
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    pub fn into_records(self) -> Vec<SpriteRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a SpriteCatalog {
    type Item = &'a SpriteRecord;
    type IntoIter = std::slice::Iter<'a, SpriteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for SpriteCatalog {
    type Item = SpriteRecord;
    type IntoIter = std::vec::IntoIter<SpriteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
