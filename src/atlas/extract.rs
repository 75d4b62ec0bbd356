//! Region extraction: copy one validated rect out of the atlas.

use image::RgbaImage;

use crate::atlas::store::AtlasImage;
use crate::core::error::{CatalogError, Result};
use crate::core::types::PixelRect;

/// Copy `rect` out of `atlas` into a new, independently owned image.
///
/// Output pixel `(i, j)` is atlas pixel `(rect.x + i, rect.y + j)`. The rect
/// is checked again against the decoded buffer; a mismatch here means the
/// validator and the store disagree and is reported as
/// [`CatalogError::Extraction`].
pub fn extract_region(atlas: &AtlasImage, name: &str, rect: &PixelRect) -> Result<RgbaImage> {
    let view = atlas.view(rect).ok_or_else(|| {
        let (atlas_width, atlas_height) = atlas.dimensions();
        CatalogError::Extraction {
            name: name.to_string(),
            rect: (*rect).into(),
            atlas_width,
            atlas_height,
        }
    })?;

    Ok(view.to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn atlas(width: u32, height: u32) -> AtlasImage {
        let pixels = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([x as u8, y as u8, (x * y) as u8, 255])
        });
        AtlasImage::from_rgba(pixels).unwrap()
    }

    #[test]
    fn test_extracted_pixels_match_atlas() {
        let atlas = atlas(20, 10);
        let rect = PixelRect::new(3, 2, 5, 4);
        let sprite = extract_region(&atlas, "a", &rect).unwrap();

        assert_eq!(sprite.dimensions(), (5, 4));
        for j in 0..rect.height {
            for i in 0..rect.width {
                assert_eq!(
                    Some(sprite.get_pixel(i, j).0),
                    atlas.get_pixel(rect.x + i, rect.y + j)
                );
            }
        }
    }

    #[test]
    fn test_full_atlas_extraction() {
        let atlas = atlas(8, 8);
        let sprite = extract_region(&atlas, "all", &PixelRect::new(0, 0, 8, 8)).unwrap();
        assert_eq!(sprite.as_raw().as_slice(), atlas.as_raw());
    }

    #[test]
    fn test_extraction_copies() {
        let atlas = atlas(8, 8);
        let sprite = extract_region(&atlas, "a", &PixelRect::new(0, 0, 2, 2)).unwrap();
        // The record keeps its pixels after the atlas is gone
        drop(atlas);
        assert_eq!(sprite.get_pixel(1, 1).0, [1, 1, 1, 255]);
    }

    #[test]
    fn test_zero_sized_region() {
        let atlas = atlas(8, 8);
        let sprite = extract_region(&atlas, "empty", &PixelRect::new(8, 8, 0, 0)).unwrap();
        assert_eq!(sprite.dimensions(), (0, 0));
        assert!(sprite.as_raw().is_empty());
    }

    #[test]
    fn test_out_of_bounds_is_extraction_error() {
        let atlas = atlas(20, 10);
        match extract_region(&atlas, "late", &PixelRect::new(15, 0, 10, 10)) {
            Err(CatalogError::Extraction {
                name,
                atlas_width,
                atlas_height,
                ..
            }) => {
                assert_eq!(name, "late");
                assert_eq!((atlas_width, atlas_height), (20, 10));
            }
            other => panic!("Expected Extraction error, got {:?}", other),
        }
    }
}
