//! Column content profiling over a classified mask.
use image::RgbaImage;

use crate::types::ScanMode;

/// Vertical half-height of the banded scan window
const BAND_HALF_HEIGHT: i64 = 30;
/// Row stride when sampling inside the band
const BAND_STEP: i64 = 5;

/// Build a per-column "has content" profile.
///
/// `FullColumn` inspects every row and is required when the vertical
/// position of the sprites is unknown. `Banded` only samples a fixed
/// window around `scan_row` (the vertical middle when `None`), which is
/// cheaper for sheets whose sprites sit on a known row.
pub fn column_profile(
    mask: &RgbaImage,
    scan_mode: ScanMode,
    scan_row: Option<u32>,
    alpha_threshold: u8,
) -> Vec<bool> {
    if mask.height() == 0 {
        return vec![false; mask.width() as usize];
    }
    match scan_mode {
        ScanMode::FullColumn => full_column_profile(mask, alpha_threshold),
        ScanMode::Banded => banded_profile(
            mask,
            scan_row.unwrap_or(mask.height() / 2),
            alpha_threshold,
        ),
    }
}

fn full_column_profile(mask: &RgbaImage, alpha_threshold: u8) -> Vec<bool> {
    let (w, h) = mask.dimensions();
    (0..w)
        .map(|x| (0..h).any(|y| mask.get_pixel(x, y).0[3] > alpha_threshold))
        .collect()
}

fn banded_profile(mask: &RgbaImage, scan_row: u32, alpha_threshold: u8) -> Vec<bool> {
    let (w, h) = mask.dimensions();
    let max_y = i64::from(h) - 1;
    (0..w)
        .map(|x| {
            let mut offset = -BAND_HALF_HEIGHT;
            while offset <= BAND_HALF_HEIGHT {
                let y = (i64::from(scan_row) + offset).clamp(0, max_y) as u32;
                if mask.get_pixel(x, y).0[3] > alpha_threshold {
                    return true;
                }
                offset += BAND_STEP;
            }
            false
        })
        .collect()
}
