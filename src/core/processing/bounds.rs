//! Vertical bounds resolution for column spans, and whole-image content
//! bounds for still assets.
use image::RgbaImage;

use crate::core::processing::segment::Span;

/// Pixel bounds of one sprite, half-open on `right` and `bottom`.
///
/// A degenerate box (zero width or height) is a valid terminal state: it
/// marks a span with no usable content and downstream stages render it as
/// a fully transparent frame instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl SpriteBounds {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_degenerate(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }
}

/// Scan every column of `span` for the vertical extent of content above
/// the alpha noise floor. Returns an empty box (`top = height, bottom = 0`)
/// when nothing in the span clears the threshold.
pub fn resolve(mask: &RgbaImage, span: Span, alpha_threshold: u8) -> SpriteBounds {
    let h = mask.height();
    let right = span.end.min(mask.width());
    let mut top = h;
    let mut bottom = 0;

    for x in span.start..right {
        if let Some(y) = (0..h).find(|&y| mask.get_pixel(x, y).0[3] > alpha_threshold) {
            top = top.min(y);
        }
        if let Some(y) = (0..h).rev().find(|&y| mask.get_pixel(x, y).0[3] > alpha_threshold) {
            bottom = bottom.max(y + 1);
        }
    }

    SpriteBounds {
        left: span.start,
        top,
        right,
        bottom,
    }
}

/// Bounding box of every pixel above the alpha noise floor, the
/// whole-image analogue of [`resolve`]. Used by still assets that crop to
/// content before fitting.
pub fn content_bounds(mask: &RgbaImage, alpha_threshold: u8) -> SpriteBounds {
    let (w, h) = mask.dimensions();
    let mut bounds = SpriteBounds {
        left: w,
        top: h,
        right: 0,
        bottom: 0,
    };
    for (x, y, px) in mask.enumerate_pixels() {
        if px.0[3] > alpha_threshold {
            bounds.left = bounds.left.min(x);
            bounds.top = bounds.top.min(y);
            bounds.right = bounds.right.max(x + 1);
            bounds.bottom = bounds.bottom.max(y + 1);
        }
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn resolve_finds_vertical_extent() {
        let mut img = RgbaImage::new(20, 30);
        for y in 5..12 {
            img.put_pixel(8, y, Rgba([10, 20, 30, 255]));
        }
        let bounds = resolve(&img, Span::new(4, 12), 30);
        assert_eq!(
            bounds,
            SpriteBounds {
                left: 4,
                top: 5,
                right: 12,
                bottom: 12
            }
        );
        assert!(!bounds.is_degenerate());
    }

    #[test]
    fn resolve_empty_span_is_degenerate() {
        let img = RgbaImage::new(20, 30);
        let bounds = resolve(&img, Span::new(0, 20), 30);
        assert_eq!(bounds.top, 30);
        assert_eq!(bounds.bottom, 0);
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn resolve_ignores_fringe_below_threshold() {
        let mut img = RgbaImage::new(4, 4);
        img.put_pixel(1, 1, Rgba([0, 0, 0, 20]));
        let bounds = resolve(&img, Span::new(0, 4), 30);
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn content_bounds_covers_all_content() {
        let mut img = RgbaImage::new(16, 16);
        img.put_pixel(3, 4, Rgba([255, 0, 0, 255]));
        img.put_pixel(10, 12, Rgba([0, 255, 0, 255]));
        let bounds = content_bounds(&img, 30);
        assert_eq!(
            bounds,
            SpriteBounds {
                left: 3,
                top: 4,
                right: 11,
                bottom: 13
            }
        );
    }
}
