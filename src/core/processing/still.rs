//! Still (non-animated) asset normalization: backgrounds, objects, tiles.
//! These reuse the classifier and frame-fitting primitives of the sprite
//! pipeline but skip segmentation entirely.
use image::{RgbaImage, imageops};

use crate::core::params::{BackgroundParams, ContainParams, TileParams};
use crate::core::processing::background::classify;
use crate::core::processing::bounds::content_bounds;
use crate::core::processing::frame::{crop_padded, fit_into_frame};
use crate::core::processing::resize::resize_rgba;
use crate::types::Alignment;

/// Stretch to exact output dimensions, optionally clearing the background
/// first. Used for parallax layers whose aspect ratio change is intended.
pub fn stretch_to(
    image: &RgbaImage,
    background: Option<&BackgroundParams>,
    target_cols: u32,
    target_rows: u32,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    let cleaned = match background {
        Some(params) => classify(image, params),
        None => image.clone(),
    };
    resize_rgba(&cleaned, target_cols, target_rows)
}

/// Clear the background, crop to content, scale uniformly to the fill
/// budget and center on both axes of a square canvas.
pub fn contain_in_square(
    image: &RgbaImage,
    params: &ContainParams,
    size: u32,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    let mask = classify(image, &params.background);
    let bounds = content_bounds(&mask, params.alpha_threshold);
    if bounds.is_degenerate() {
        return Ok(RgbaImage::new(size, size));
    }
    let crop = crop_padded(&mask, bounds, params.padding);
    fit_into_frame(&crop, size, params.fill_ratio, Alignment::Center, 0)
}

/// Cut a fractional border margin (removes rounded edges and frames) and
/// stretch what remains to a square tile.
pub fn tile_square(
    image: &RgbaImage,
    params: &TileParams,
    size: u32,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    let (w, h) = image.dimensions();
    let margin_x = (f64::from(w) * f64::from(params.margin)) as u32;
    let margin_y = (f64::from(h) * f64::from(params.margin)) as u32;
    let crop = if margin_x * 2 < w && margin_y * 2 < h {
        imageops::crop_imm(image, margin_x, margin_y, w - margin_x * 2, h - margin_y * 2)
            .to_image()
    } else {
        image.clone()
    };
    resize_rgba(&crop, size, size)
}
