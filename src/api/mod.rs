//! High-level, ergonomic library API: process one sheet to a buffer or a
//! file, batch-process a whole manifest, and verify outputs. Prefer these
//! entrypoints over the low-level processing modules when embedding
//! SPRITEPRO.
use std::fs;
use std::path::Path;

use image::RgbaImage;
use tracing::{info, warn};

use crate::core::manifest::{AssetEntry, AssetMode, Manifest};
use crate::core::params::SheetParams;
use crate::core::processing::pipeline::extract_sheet;
use crate::core::processing::still;
use crate::error::{Error, Result};
use crate::io::reader::open_rgba;
use crate::io::writers::png::write_rgba_png;

fn validate_sheet_params(params: &SheetParams) -> Result<()> {
    if params.frame_count == 0 {
        return Err(Error::InvalidArgument {
            arg: "frame_count",
            value: params.frame_count.to_string(),
        });
    }
    if params.frame_size == 0 {
        return Err(Error::InvalidArgument {
            arg: "frame_size",
            value: params.frame_size.to_string(),
        });
    }
    if !(params.fill_ratio > 0.0 && params.fill_ratio <= 1.0) {
        return Err(Error::InvalidArgument {
            arg: "fill_ratio",
            value: params.fill_ratio.to_string(),
        });
    }
    Ok(())
}

/// Process a sprite-sheet source to an in-memory buffer (no output I/O).
pub fn process_sheet_to_buffer(input: &Path, params: &SheetParams) -> Result<RgbaImage> {
    validate_sheet_params(params)?;
    let image = open_rgba(input)?;
    extract_sheet(&image, params).map_err(Error::external)
}

/// Process a sprite-sheet source to a PNG file.
pub fn process_sheet_to_path(input: &Path, output: &Path, params: &SheetParams) -> Result<()> {
    let sheet = process_sheet_to_buffer(input, params)?;
    write_rgba_png(output, &sheet).map_err(Error::external)
}

/// Render one manifest entry from `input_dir` into `output_dir`.
pub fn process_asset(entry: &AssetEntry, input_dir: &Path, output_dir: &Path) -> Result<()> {
    if entry.width == 0 || entry.height == 0 {
        return Err(Error::InvalidArgument {
            arg: "width/height",
            value: format!("{}x{}", entry.width, entry.height),
        });
    }
    // Square-canvas modes cannot satisfy a non-square contract
    if matches!(entry.mode, AssetMode::Contain { .. } | AssetMode::Tile { .. })
        && entry.width != entry.height
    {
        return Err(Error::InvalidArgument {
            arg: "width/height",
            value: format!("{}x{}", entry.width, entry.height),
        });
    }

    let source = input_dir.join(&entry.source);
    let output = output_dir.join(entry.output_rel());
    let image = open_rgba(&source)?;

    let rendered = match &entry.mode {
        AssetMode::Sheet { params } => {
            validate_sheet_params(params)?;
            extract_sheet(&image, params).map_err(Error::external)?
        }
        AssetMode::Stretch { background } => {
            still::stretch_to(&image, background.as_ref(), entry.width, entry.height)
                .map_err(Error::external)?
        }
        AssetMode::Contain { params } => {
            still::contain_in_square(&image, params, entry.width).map_err(Error::external)?
        }
        AssetMode::Tile { params } => {
            still::tile_square(&image, params, entry.width).map_err(Error::external)?
        }
    };

    write_rgba_png(&output, &rendered).map_err(Error::external)
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Process every manifest entry from `input_dir` into `output_dir`.
///
/// A missing source skips that asset only. Other per-asset errors are
/// counted in the report when `continue_on_error` is set; otherwise the
/// first one is returned.
pub fn process_manifest_to_path(
    manifest: &Manifest,
    input_dir: &Path,
    output_dir: &Path,
    continue_on_error: bool,
) -> Result<BatchReport> {
    fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();
    for entry in &manifest.assets {
        match process_asset(entry, input_dir, output_dir) {
            Ok(()) => {
                info!("Processed: {} -> {}", entry.source, entry.output_rel());
                report.processed += 1;
            }
            Err(Error::MissingSource { path }) => {
                warn!("Skipping missing source: {}", path.display());
                report.skipped += 1;
            }
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {}: {}", entry.source, e);
            }
        }
    }

    Ok(report)
}
