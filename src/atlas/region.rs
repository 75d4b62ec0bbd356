//! Rectangle normalization: defaults, bounds validation and pixel rounding.
//!
//! Rectangles are never clamped. A rect that does not fit the atlas means
//! the manifest and atlas do not belong together, and the caller must hear
//! about it.

use crate::core::error::{CatalogError, Result};
use crate::core::types::{NormalizedRect, PixelRect, SpriteRect};

/// Fill defaults, validate against the atlas, and round to whole pixels.
pub fn normalize_rect(
    name: &str,
    rect: &SpriteRect,
    atlas_size: (u32, u32),
) -> Result<PixelRect> {
    let filled = rect.with_defaults();
    validate_rect(name, &filled, atlas_size)?;

    let pixel = round_rect(&filled);
    // Rounding x and width both up can push the far edge one pixel past the atlas
    if !pixel.fits_within(atlas_size.0, atlas_size.1) {
        return Err(invalid(name, &filled));
    }
    Ok(pixel)
}

/// Check a filled-in rect against the atlas bounds.
pub fn validate_rect(name: &str, rect: &NormalizedRect, atlas_size: (u32, u32)) -> Result<()> {
    let (atlas_width, atlas_height) = atlas_size;
    let fields = [rect.x, rect.y, rect.width, rect.height];

    let in_range = fields.iter().all(|v| v.is_finite() && *v >= 0.0)
        && rect.right() <= f64::from(atlas_width)
        && rect.bottom() <= f64::from(atlas_height);

    if in_range {
        Ok(())
    } else {
        Err(invalid(name, rect))
    }
}

/// Round each field half-away-from-zero.
///
/// Only meaningful for rects that passed [`validate_rect`]: every field is
/// then finite, non-negative and no larger than a `u32` atlas dimension.
pub fn round_rect(rect: &NormalizedRect) -> PixelRect {
    PixelRect::new(
        round_px(rect.x),
        round_px(rect.y),
        round_px(rect.width),
        round_px(rect.height),
    )
}

fn round_px(value: f64) -> u32 {
    // f64::round rounds half away from zero; `as` saturates
    value.round() as u32
}

fn invalid(name: &str, rect: &NormalizedRect) -> CatalogError {
    CatalogError::InvalidRect {
        name: name.to_string(),
        rect: *rect,
    }
}
