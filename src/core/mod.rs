pub mod config;
pub mod error;
pub mod types;

pub use config::{CatalogConfig, FailurePolicy};
pub use error::{CatalogError, Result};
pub use types::{NormalizedRect, PixelRect, SpriteRect};
