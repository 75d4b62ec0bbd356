use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::NormalizedRect;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A resource file could not be found. Only raised by the path-based
    /// convenience loaders; `CatalogBuilder::build` works on bytes.
    #[error("Resource missing: {}", .0.display())]
    ResourceMissing(PathBuf),

    #[error("Manifest decode error: {0}")]
    ManifestDecode(String),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Invalid rect for sprite '{name}': {rect}")]
    InvalidRect { name: String, rect: NormalizedRect },

    #[error(
        "Extraction failed for sprite '{name}': {rect} does not fit {atlas_width}x{atlas_height} atlas"
    )]
    Extraction {
        name: String,
        rect: NormalizedRect,
        atlas_width: u32,
        atlas_height: u32,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CatalogError {
    /// Name of the sprite this error belongs to, if it is entry-specific.
    pub fn sprite_name(&self) -> Option<&str> {
        match self {
            CatalogError::InvalidRect { name, .. } | CatalogError::Extraction { name, .. } => {
                Some(name)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::ManifestDecode(e.to_string())
    }
}

impl From<image::ImageError> for CatalogError {
    fn from(e: image::ImageError) -> Self {
        CatalogError::ImageDecode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
