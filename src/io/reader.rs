//! Source raster decoding.
use std::path::Path;

use image::RgbaImage;

use crate::error::{Error, Result};

/// Open a source image in any common raster format and decode to RGBA8.
///
/// A missing file is a [`Error::MissingSource`]: fatal for the asset being
/// processed, but callers running a batch keep going with the rest.
pub fn open_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(Error::MissingSource {
            path: path.to_path_buf(),
        });
    }
    Ok(image::open(path)?.to_rgba8())
}
