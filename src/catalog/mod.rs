//! Sprite catalog assembly

pub mod builder;
pub mod record;

pub use builder::{build_catalog, CatalogBuilder};
pub use record::{SkippedEntry, SpriteCatalog, SpriteRecord};
