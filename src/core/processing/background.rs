//! Background classification: turn fake-transparency backgrounds into real
//! alpha. Every strategy only rewrites the alpha channel; RGB values of
//! cleared pixels are left byte-for-byte intact so downstream stages can
//! still inspect them.
use image::RgbaImage;

use crate::core::params::BackgroundParams;
use crate::types::BackgroundStrategy;

/// Per-channel delta under which a pixel counts as neutral (Luminance)
const GREY_DELTA: u8 = 10;
/// Mid-grey band cleared by the Luminance strategy, exclusive on both ends
const GREY_BAND: (u8, u8) = (180, 220);

/// Near-white floor applied by the Checkerboard strategy in addition to
/// the two sampled tones
const CHECKER_WHITE_THRESHOLD: u8 = 235;
/// Neutral-grey rule applied by the Checkerboard strategy
const CHECKER_GREY_DELTA: u8 = 12;
const CHECKER_GREY_BAND: (u8, u8) = (140, 220);
/// Edge length of the sampled top-left region
const CHECKER_SAMPLE_EDGE: u32 = 20;
/// Brightness midpoint separating the light and dark checker tones
const CHECKER_LIGHT_FLOOR: u16 = 170;
const CHECKER_DARK_FLOOR: u16 = 100;
/// Tone fallbacks when a sample bucket comes up empty; these are the
/// canonical checkerboard greys used by image editors
const CHECKER_LIGHT_FALLBACK: [u8; 3] = [204, 204, 204];
const CHECKER_DARK_FALLBACK: [u8; 3] = [153, 153, 153];

/// Classify background pixels and clear their alpha.
///
/// Deterministic and side-effect-free: the input is never touched, a new
/// image is returned with alpha rewritten according to the selected
/// strategy.
pub fn classify(image: &RgbaImage, params: &BackgroundParams) -> RgbaImage {
    if image.width() == 0 || image.height() == 0 {
        return image.clone();
    }
    match params.strategy {
        BackgroundStrategy::Luminance => clear_luminance(image, params.white_threshold),
        BackgroundStrategy::CornerSample => clear_corner_reference(image, params.tolerance),
        BackgroundStrategy::Checkerboard => clear_checkerboard(image, params.tolerance),
        BackgroundStrategy::SaturationKeep => {
            keep_saturated(image, params.saturation_threshold, params.soft_band)
        }
    }
}

fn is_near_white(r: u8, g: u8, b: u8, threshold: u8) -> bool {
    r > threshold && g > threshold && b > threshold
}

fn is_neutral_grey(r: u8, g: u8, b: u8, delta: u8, band: (u8, u8)) -> bool {
    r.abs_diff(g) < delta && g.abs_diff(b) < delta && r > band.0 && r < band.1
}

fn matches_reference(px: [u8; 3], reference: [u8; 3], tolerance: u8) -> bool {
    px[0].abs_diff(reference[0]) < tolerance
        && px[1].abs_diff(reference[1]) < tolerance
        && px[2].abs_diff(reference[2]) < tolerance
}

/// White/near-white removal plus the fixed mid-grey band that flat
/// checkerboard exports collapse into.
fn clear_luminance(image: &RgbaImage, white_threshold: u8) -> RgbaImage {
    let mut out = image.clone();
    for px in out.pixels_mut() {
        let [r, g, b, _] = px.0;
        if is_near_white(r, g, b, white_threshold)
            || is_neutral_grey(r, g, b, GREY_DELTA, GREY_BAND)
        {
            px.0[3] = 0;
        }
    }
    out
}

/// Average the four corner pixels into a reference color and clear
/// anything within tolerance of it. Works when the background is a flat
/// tone that is not pure white.
fn clear_corner_reference(image: &RgbaImage, tolerance: u8) -> RgbaImage {
    let (w, h) = image.dimensions();
    let x0 = 2.min(w - 1);
    let x1 = w.saturating_sub(3).min(w - 1);
    let y0 = 2.min(h - 1);
    let y1 = h.saturating_sub(3).min(h - 1);
    let corners = [
        image.get_pixel(x0, y0),
        image.get_pixel(x1, y0),
        image.get_pixel(x0, y1),
        image.get_pixel(x1, y1),
    ];

    let mut reference = [0u8; 3];
    for (c, slot) in reference.iter_mut().enumerate() {
        let sum: u16 = corners.iter().map(|px| u16::from(px.0[c])).sum();
        *slot = (sum / 4) as u8;
    }

    let mut out = image.clone();
    for px in out.pixels_mut() {
        let [r, g, b, _] = px.0;
        if matches_reference([r, g, b], reference, tolerance) {
            px.0[3] = 0;
        }
    }
    out
}

/// Bucket the sampled top-left region into light and dark tones by a
/// brightness midpoint and average each bucket into a reference color.
fn sample_checker_tones(image: &RgbaImage) -> ([u8; 3], [u8; 3]) {
    let (w, h) = image.dimensions();
    let mut light: Vec<[u8; 3]> = Vec::new();
    let mut dark: Vec<[u8; 3]> = Vec::new();

    for y in 0..h.min(CHECKER_SAMPLE_EDGE) {
        for x in 0..w.min(CHECKER_SAMPLE_EDGE) {
            let [r, g, b, _] = image.get_pixel(x, y).0;
            let brightness = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
            if brightness > CHECKER_LIGHT_FLOOR {
                light.push([r, g, b]);
            } else if brightness > CHECKER_DARK_FLOOR && brightness < CHECKER_LIGHT_FLOOR {
                dark.push([r, g, b]);
            }
        }
    }

    (
        average_tone(&light, CHECKER_LIGHT_FALLBACK),
        average_tone(&dark, CHECKER_DARK_FALLBACK),
    )
}

fn average_tone(samples: &[[u8; 3]], fallback: [u8; 3]) -> [u8; 3] {
    if samples.is_empty() {
        return fallback;
    }
    let mut tone = [0u8; 3];
    for (c, slot) in tone.iter_mut().enumerate() {
        let sum: u32 = samples.iter().map(|s| u32::from(s[c])).sum();
        *slot = (sum / samples.len() as u32) as u8;
    }
    tone
}

/// Dual-tone checkerboard removal: clear pixels matching either sampled
/// tone, plus near-white and neutral grey by fixed rules.
fn clear_checkerboard(image: &RgbaImage, tolerance: u8) -> RgbaImage {
    let (light, dark) = sample_checker_tones(image);
    tracing::debug!(
        "Checkerboard tones: light={:?}, dark={:?}",
        light,
        dark
    );

    let mut out = image.clone();
    for px in out.pixels_mut() {
        let [r, g, b, _] = px.0;
        let rgb = [r, g, b];
        if matches_reference(rgb, light, tolerance)
            || matches_reference(rgb, dark, tolerance)
            || is_near_white(r, g, b, CHECKER_WHITE_THRESHOLD)
            || is_neutral_grey(r, g, b, CHECKER_GREY_DELTA, CHECKER_GREY_BAND)
        {
            px.0[3] = 0;
        }
    }
    out
}

/// Inverse view: keep pixels whose channel spread says "colored", clear
/// everything neutral. With a nonzero `soft_band` the alpha ramps up
/// linearly through the transition band just below the threshold, which
/// keeps anti-aliased edges from turning into hard stair-steps.
fn keep_saturated(image: &RgbaImage, threshold: u8, soft_band: u8) -> RgbaImage {
    let mut out = image.clone();
    for px in out.pixels_mut() {
        let [r, g, b, _] = px.0;
        let saturation = r.max(g).max(b) - r.min(g).min(b);
        if saturation > threshold {
            continue;
        }
        let floor = threshold.saturating_sub(soft_band);
        if soft_band > 0 && saturation > floor {
            px.0[3] = (u32::from(saturation - floor) * 255 / u32::from(soft_band)) as u8;
        } else {
            px.0[3] = 0;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BackgroundStrategy;
    use image::Rgba;

    fn params(strategy: BackgroundStrategy) -> BackgroundParams {
        BackgroundParams {
            strategy,
            ..BackgroundParams::default()
        }
    }

    #[test]
    fn luminance_clears_near_white_and_keeps_color() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([250, 250, 250, 255]));
        img.put_pixel(1, 0, Rgba([250, 100, 100, 255]));

        let mask = classify(&img, &params(BackgroundStrategy::Luminance));

        // Cleared pixel keeps its RGB bytes, only alpha drops
        assert_eq!(mask.get_pixel(0, 0).0, [250, 250, 250, 0]);
        assert_eq!(mask.get_pixel(1, 0).0, [250, 100, 100, 255]);
    }

    #[test]
    fn luminance_clears_mid_grey_band() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([200, 198, 203, 255]));
        // Below the band: dark grey survives
        img.put_pixel(1, 0, Rgba([90, 90, 90, 255]));

        let mask = classify(&img, &params(BackgroundStrategy::Luminance));
        assert_eq!(mask.get_pixel(0, 0).0[3], 0);
        assert_eq!(mask.get_pixel(1, 0).0[3], 255);
    }

    #[test]
    fn corner_sample_clears_flat_background() {
        let mut img = RgbaImage::from_pixel(16, 16, Rgba([120, 140, 160, 255]));
        img.put_pixel(8, 8, Rgba([255, 40, 40, 255]));

        let mask = classify(&img, &params(BackgroundStrategy::CornerSample));
        assert_eq!(mask.get_pixel(0, 0).0[3], 0);
        assert_eq!(mask.get_pixel(8, 8).0[3], 255);
    }

    #[test]
    fn checkerboard_clears_both_tones() {
        let mut img = RgbaImage::new(32, 32);
        for (x, y, px) in img.enumerate_pixels_mut() {
            let tone = if (x / 8 + y / 8) % 2 == 0 { 204 } else { 153 };
            *px = Rgba([tone, tone, tone, 255]);
        }
        img.put_pixel(16, 16, Rgba([30, 80, 220, 255]));

        let mask = classify(&img, &params(BackgroundStrategy::Checkerboard));
        assert_eq!(mask.get_pixel(0, 0).0[3], 0);
        assert_eq!(mask.get_pixel(12, 0).0[3], 0);
        assert_eq!(mask.get_pixel(16, 16).0[3], 255);
    }

    #[test]
    fn saturation_keep_ramps_through_soft_band() {
        let p = BackgroundParams {
            strategy: BackgroundStrategy::SaturationKeep,
            saturation_threshold: 35,
            soft_band: 15,
            ..BackgroundParams::default()
        };
        let mut img = RgbaImage::new(3, 1);
        // spread 10: below the band, cleared
        img.put_pixel(0, 0, Rgba([110, 100, 100, 255]));
        // spread 30: inside the band, partial alpha 255*10/15
        img.put_pixel(1, 0, Rgba([130, 100, 100, 255]));
        // spread 80: fully kept
        img.put_pixel(2, 0, Rgba([180, 100, 100, 255]));

        let mask = classify(&img, &p);
        assert_eq!(mask.get_pixel(0, 0).0[3], 0);
        assert_eq!(mask.get_pixel(1, 0).0[3], 170);
        assert_eq!(mask.get_pixel(2, 0).0[3], 255);
    }

    #[test]
    fn saturation_keep_hard_edge_without_band() {
        let p = BackgroundParams {
            strategy: BackgroundStrategy::SaturationKeep,
            saturation_threshold: 25,
            soft_band: 0,
            ..BackgroundParams::default()
        };
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([200, 180, 178, 255]));
        img.put_pixel(1, 0, Rgba([60, 90, 200, 255]));

        let mask = classify(&img, &p);
        assert_eq!(mask.get_pixel(0, 0).0[3], 0);
        assert_eq!(mask.get_pixel(1, 0).0[3], 255);
    }
}
