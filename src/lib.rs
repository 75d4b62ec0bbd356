//! Sprite Atlas - named sprite extraction from packed texture atlases
//!
//! A JSON manifest maps sprite names to pixel rectangles inside a single
//! atlas image. [`CatalogBuilder`] decodes both, validates every rectangle
//! and returns a [`SpriteCatalog`] of owned sprite images sorted by name.

pub mod atlas;
pub mod catalog;
pub mod core;
pub mod manifest;

pub use crate::atlas::AtlasImage;
pub use crate::catalog::{build_catalog, CatalogBuilder, SkippedEntry, SpriteCatalog, SpriteRecord};
pub use crate::core::{
    CatalogConfig, CatalogError, FailurePolicy, NormalizedRect, PixelRect, Result, SpriteRect,
};
pub use crate::manifest::{parse_manifest, SpriteManifest, SpriteManifestEntry};
