//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sprite rectangle as written in the manifest.
///
/// Every field is optional; a missing field means `0.0`. Units are pixels
/// with the origin at the top-left corner and y growing downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriteRect {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl SpriteRect {
    /// Rect with all four fields present.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Fill every missing field with `0.0`.
    pub fn with_defaults(&self) -> NormalizedRect {
        NormalizedRect {
            x: self.x.unwrap_or(0.0),
            y: self.y.unwrap_or(0.0),
            width: self.width.unwrap_or(0.0),
            height: self.height.unwrap_or(0.0),
        }
    }
}

/// Fully populated rectangle, still in fractional pixel units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

impl fmt::Display for NormalizedRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={}, y={}, width={}, height={}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Integer pixel rectangle, ready for extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rect lies inside a `width` x `height` image.
    ///
    /// Uses u64 arithmetic so `x + width` cannot overflow.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        u64::from(self.x) + u64::from(self.width) <= u64::from(width)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(height)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl From<PixelRect> for NormalizedRect {
    fn from(rect: PixelRect) -> Self {
        NormalizedRect::new(
            f64::from(rect.x),
            f64::from(rect.y),
            f64::from(rect.width),
            f64::from(rect.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let rect = SpriteRect {
            width: Some(30.0),
            height: Some(30.0),
            ..Default::default()
        };
        assert_eq!(rect.with_defaults(), NormalizedRect::new(0.0, 0.0, 30.0, 30.0));
    }

    #[test]
    fn test_defaults_keep_explicit_fields() {
        let rect = SpriteRect::new(1.5, 2.0, 3.0, 4.25);
        assert_eq!(rect.with_defaults(), NormalizedRect::new(1.5, 2.0, 3.0, 4.25));
    }

    #[test]
    fn test_empty_rect_defaults_to_zero() {
        assert_eq!(SpriteRect::default().with_defaults(), NormalizedRect::default());
    }

    #[test]
    fn test_pixel_rect_fits_within() {
        assert!(PixelRect::new(10, 0, 10, 10).fits_within(20, 10));
        assert!(!PixelRect::new(11, 0, 10, 10).fits_within(20, 10));
        assert!(!PixelRect::new(0, 1, 10, 10).fits_within(20, 10));
        // Would overflow u32 if added naively
        assert!(!PixelRect::new(u32::MAX, 0, 1, 1).fits_within(u32::MAX, 1));
    }

    #[test]
    fn test_rect_display() {
        let rect = NormalizedRect::new(15.0, 0.0, 10.5, 10.0);
        assert_eq!(rect.to_string(), "x=15, y=0, width=10.5, height=10");
    }
}
