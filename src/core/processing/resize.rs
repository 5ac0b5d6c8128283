use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbaImage;

/// Resample an RGBA image to the exact target dimensions with a Lanczos3
/// convolution. Alpha is handled by the resizer (premultiply/divide), so
/// transparent fringe does not bleed background color into sprite edges.
pub fn resize_rgba(
    src: &RgbaImage,
    target_cols: u32,
    target_rows: u32,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    if src.dimensions() == (target_cols, target_rows) {
        return Ok(src.clone());
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        src.width(),
        src.height(),
        src.as_raw().clone(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| "resized buffer has unexpected length".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn resize_hits_exact_dimensions() {
        let src = RgbaImage::from_pixel(100, 40, Rgba([200, 50, 50, 255]));
        let out = resize_rgba(&src, 58, 23).unwrap();
        assert_eq!(out.dimensions(), (58, 23));
        // A flat source stays flat through the convolution, give or take
        // fixed-point rounding
        let px = out.get_pixel(29, 11).0;
        for (got, want) in px.iter().zip([200u8, 50, 50, 255]) {
            assert!(got.abs_diff(want) <= 1, "{:?}", px);
        }
    }

    #[test]
    fn identity_resize_is_a_copy() {
        let src = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 4]));
        let out = resize_rgba(&src, 8, 8).unwrap();
        assert_eq!(out, src);
    }
}
