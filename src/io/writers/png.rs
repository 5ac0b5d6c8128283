use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

/// Write an RGBA image as PNG, creating parent directories on the way.
pub fn write_rgba_png(output: &Path, image: &RgbaImage) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    image.save_with_format(output, ImageFormat::Png)?;
    Ok(())
}
