use clap::Parser;
use std::path::PathBuf;

use spritepro::{BackgroundStrategy, ScanMode};

#[derive(Parser)]
#[command(name = "spritepro", version, about = "SPRITEPRO CLI")]
pub struct CliArgs {
    /// Input sheet image (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output PNG path (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Asset manifest with per-asset modes and expected sizes (batch mode)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Directory containing source images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Directory for processed outputs (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Number of animation frames the sheet must contain
    #[arg(long, default_value_t = 1)]
    pub frames: usize,

    /// Square frame edge in pixels
    #[arg(long, default_value_t = 64)]
    pub frame_size: u32,

    /// Background classification strategy
    #[arg(long, value_enum, default_value_t = BackgroundStrategy::Luminance)]
    pub background: BackgroundStrategy,

    /// Channel floor above which a pixel counts as white (luminance)
    #[arg(long, default_value_t = 240)]
    pub white_threshold: u8,

    /// Per-channel distance to the sampled background reference
    /// (corner-sample, checkerboard)
    #[arg(long, default_value_t = 30)]
    pub tolerance: u8,

    /// Minimum channel spread of a kept pixel (saturation-keep)
    #[arg(long, default_value_t = 25)]
    pub saturation_threshold: u8,

    /// Linear alpha ramp width below the saturation threshold; 0 disables
    #[arg(long, default_value_t = 0)]
    pub soft_band: u8,

    /// Column scan mode
    #[arg(long, value_enum, default_value_t = ScanMode::FullColumn)]
    pub scan_mode: ScanMode,

    /// Row the banded scan centers on (defaults to the vertical middle)
    #[arg(long)]
    pub scan_row: Option<u32>,

    /// Alpha noise floor for content detection
    #[arg(long, default_value_t = 30)]
    pub alpha_threshold: u8,

    /// Merge spans separated by gaps narrower than this
    #[arg(long, default_value_t = 5)]
    pub min_gap: u32,

    /// Discard content runs narrower than this
    #[arg(long)]
    pub min_span_width: Option<u32>,

    /// Context pixels kept around each sprite
    #[arg(long, default_value_t = 2)]
    pub padding: u32,

    /// Fraction of the frame a sprite is scaled to occupy
    #[arg(long, default_value_t = 0.9)]
    pub fill_ratio: f32,

    /// Gap between the sprite and the frame bottom
    #[arg(long, default_value_t = 2)]
    pub bottom_margin: u32,

    /// Verify existing outputs against the manifest without reprocessing
    #[arg(long, default_value_t = false)]
    pub verify: bool,

    /// Batch mode: keep going when individual assets fail
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
