//! Horizontal strip assembly of normalized frames.
use image::{RgbaImage, imageops};

/// Concatenate ordered frames into one transparent strip. Frame `i` lands
/// at horizontal offset `i * frame_size`; output dimensions are exactly
/// `(frame_size * frames.len(), frame_size)`.
pub fn assemble(frames: &[RgbaImage], frame_size: u32) -> RgbaImage {
    let mut sheet = RgbaImage::new(frame_size * frames.len() as u32, frame_size);
    for (i, frame) in frames.iter().enumerate() {
        imageops::overlay(&mut sheet, frame, i as i64 * i64::from(frame_size), 0);
    }
    sheet
}
