//! Sprite manifest decoding

pub mod parser;
pub mod schema;

pub use parser::{parse_manifest, parse_manifest_str};
pub use schema::{SpriteManifest, SpriteManifestEntry};
