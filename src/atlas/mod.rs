//! Texture atlas decoding, rect normalization and sprite extraction.

pub mod extract;
pub mod region;
pub mod store;

pub use extract::extract_region;
pub use region::{normalize_rect, round_rect, validate_rect};
pub use store::{AtlasImage, BYTES_PER_PIXEL};
