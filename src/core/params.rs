use serde::{Deserialize, Serialize};

use crate::types::{Alignment, BackgroundStrategy, ScanMode};

/// Background classification parameters shared by sheet and still assets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundParams {
    pub strategy: BackgroundStrategy,
    /// Channel floor above which a pixel counts as white (Luminance)
    pub white_threshold: u8,
    /// Per-channel distance to the sampled reference color (CornerSample, Checkerboard)
    pub tolerance: u8,
    /// Minimum channel spread of a kept pixel (SaturationKeep)
    pub saturation_threshold: u8,
    /// Width of the linear alpha ramp below the saturation threshold; 0 disables it
    pub soft_band: u8,
}

impl Default for BackgroundParams {
    fn default() -> Self {
        Self {
            strategy: BackgroundStrategy::Luminance,
            white_threshold: 240,
            tolerance: 30,
            saturation_threshold: 25,
            soft_band: 0,
        }
    }
}

/// Sprite-sheet extraction parameters suitable for manifests and CLI presets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetParams {
    /// Number of animation frames the sheet must contain
    pub frame_count: usize,
    /// Square frame edge in pixels
    pub frame_size: u32,
    #[serde(flatten)]
    pub background: BackgroundParams,
    pub scan_mode: ScanMode,
    /// Row the banded scan centers on; None means the vertical middle
    pub scan_row: Option<u32>,
    /// Alpha noise floor for content detection, ignores anti-aliasing fringe
    pub alpha_threshold: u8,
    /// Gaps narrower than this merge adjacent spans
    pub min_gap: u32,
    /// Runs narrower than this are discarded as noise; None disables the filter
    pub min_span_width: Option<u32>,
    /// Context pixels kept around the resolved bounds
    pub padding: u32,
    /// Fraction of the frame a sprite is scaled to occupy
    pub fill_ratio: f32,
    pub alignment: Alignment,
    /// Gap between the sprite and the frame bottom for bottom alignment
    pub bottom_margin: u32,
}

impl Default for SheetParams {
    fn default() -> Self {
        Self {
            frame_count: 1,
            frame_size: 64,
            background: BackgroundParams::default(),
            scan_mode: ScanMode::FullColumn,
            scan_row: None,
            alpha_threshold: 30,
            min_gap: 5,
            min_span_width: None,
            padding: 2,
            fill_ratio: 0.9,
            alignment: Alignment::BottomCenter,
            bottom_margin: 2,
        }
    }
}

/// Parameters for still assets fitted into a square canvas (objects).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainParams {
    pub background: BackgroundParams,
    pub alpha_threshold: u8,
    pub padding: u32,
    pub fill_ratio: f32,
}

impl Default for ContainParams {
    fn default() -> Self {
        Self {
            background: BackgroundParams {
                strategy: BackgroundStrategy::CornerSample,
                tolerance: 35,
                ..BackgroundParams::default()
            },
            alpha_threshold: 30,
            padding: 4,
            fill_ratio: 0.95,
        }
    }
}

/// Parameters for square tiles cut from source images with rounded borders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TileParams {
    /// Fraction of each edge cropped away before resizing
    pub margin: f32,
}

impl Default for TileParams {
    fn default() -> Self {
        Self { margin: 0.08 }
    }
}
