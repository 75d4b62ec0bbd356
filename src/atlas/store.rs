//! Atlas image store: decoded, read-only pixel buffer.

use std::io::Cursor;

use image::{GenericImageView, RgbaImage, SubImage};

use crate::core::error::{CatalogError, Result};
use crate::core::types::PixelRect;

/// Bytes per pixel for RGBA atlases.
pub const BYTES_PER_PIXEL: usize = 4;

/// A decoded, immutable RGBA8 atlas.
///
/// The pixel buffer is owned exclusively and never mutated after decode,
/// so `&AtlasImage` can be shared freely across extraction workers.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasImage {
    pixels: RgbaImage,
}

impl AtlasImage {
    /// Decode an encoded image (PNG, ...) with no size limit.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Self::decode_with_limit(bytes, u32::MAX)
    }

    /// Decode an encoded image, rejecting atlases wider or taller than
    /// `max_dimension` before the pixel data is decompressed.
    pub fn decode_with_limit(bytes: &[u8], max_dimension: u32) -> Result<Self> {
        if bytes.is_empty() {
            return Err(CatalogError::ImageDecode("atlas data is empty".to_string()));
        }

        let (width, height) = image::io::Reader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| CatalogError::ImageDecode(e.to_string()))?
            .into_dimensions()?;
        if width > max_dimension || height > max_dimension {
            return Err(CatalogError::ImageDecode(format!(
                "atlas is {}x{}, larger than the {} pixel limit",
                width, height, max_dimension
            )));
        }

        let img = image::load_from_memory(bytes)?;
        tracing::debug!(
            "Decoded {}x{} atlas ({:?})",
            img.width(),
            img.height(),
            img.color()
        );
        Self::from_rgba(img.to_rgba8())
    }

    /// Wrap already-decoded RGBA pixels.
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(CatalogError::ImageDecode(format!(
                "atlas has empty dimensions {}x{}",
                width, height
            )));
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// RGBA value at `(x, y)`, or `None` outside the atlas.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.pixels.get_pixel(x, y).0)
    }

    /// Borrowed view of `rect`, or `None` if it does not fit the atlas.
    ///
    /// The view aliases the atlas buffer; call `to_image()` on it for an
    /// owned copy.
    pub fn view(&self, rect: &PixelRect) -> Option<SubImage<&RgbaImage>> {
        if !rect.fits_within(self.width(), self.height()) {
            return None;
        }
        Some(image::imageops::crop_imm(
            &self.pixels,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
        ))
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}
