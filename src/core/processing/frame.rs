//! Per-frame normalization: crop, uniform scale, aligned paste onto a
//! square transparent canvas.
use image::{RgbaImage, imageops};

use crate::core::params::SheetParams;
use crate::core::processing::bounds::SpriteBounds;
use crate::core::processing::resize::resize_rgba;
use crate::types::Alignment;

/// Sprites narrower or shorter than this are treated as unusable noise
const MIN_SPRITE_DIM: u32 = 5;

/// Render one span's content into a `frame_size x frame_size` frame.
///
/// Degenerate or sub-minimal bounds yield a fully transparent frame; this
/// is a deliberate fallback that preserves the frame count and ordering
/// even when a source region is unusable.
pub fn normalize(
    mask: &RgbaImage,
    bounds: SpriteBounds,
    params: &SheetParams,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    let size = params.frame_size;
    if bounds.is_degenerate()
        || bounds.width() < MIN_SPRITE_DIM
        || bounds.height() < MIN_SPRITE_DIM
    {
        return Ok(RgbaImage::new(size, size));
    }

    let crop = crop_padded(mask, bounds, params.padding);
    fit_into_frame(
        &crop,
        size,
        params.fill_ratio,
        params.alignment,
        params.bottom_margin,
    )
}

/// Crop `bounds` expanded by `padding` on each side, clamped to the image
/// so no read ever lands outside the source dimensions.
pub fn crop_padded(mask: &RgbaImage, bounds: SpriteBounds, padding: u32) -> RgbaImage {
    let left = bounds.left.saturating_sub(padding);
    let top = bounds.top.saturating_sub(padding);
    let right = bounds.right.saturating_add(padding).min(mask.width());
    let bottom = bounds.bottom.saturating_add(padding).min(mask.height());
    imageops::crop_imm(mask, left, top, right - left, bottom - top).to_image()
}

/// Uniformly scale `sprite` to occupy `fill_ratio` of the square canvas
/// and paste it by the alignment rule: horizontally centered, vertically
/// either bottom-aligned (common ground line across frames) or centered.
pub fn fit_into_frame(
    sprite: &RgbaImage,
    size: u32,
    fill_ratio: f32,
    alignment: Alignment,
    bottom_margin: u32,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    let (sw, sh) = sprite.dimensions();
    let budget = f64::from(size) * f64::from(fill_ratio);
    let scale = (budget / f64::from(sw)).min(budget / f64::from(sh));
    let new_w = ((f64::from(sw) * scale).round() as u32).max(1);
    let new_h = ((f64::from(sh) * scale).round() as u32).max(1);

    let resized = resize_rgba(sprite, new_w, new_h)?;

    let mut frame = RgbaImage::new(size, size);
    let x = size.saturating_sub(new_w) / 2;
    let y = match alignment {
        Alignment::BottomCenter => size.saturating_sub(new_h).saturating_sub(bottom_margin),
        Alignment::Center => size.saturating_sub(new_h) / 2,
    };
    imageops::overlay(&mut frame, &resized, i64::from(x), i64::from(y));
    Ok(frame)
}
