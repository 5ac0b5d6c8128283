//! Asset manifest: the per-asset configuration and expected-size table
//! that every batch run processes against and every output must satisfy.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::params::{BackgroundParams, ContainParams, SheetParams, TileParams};
use crate::error::{Error, Result};

/// How one asset is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AssetMode {
    /// Sprite-sheet extraction through the segmentation pipeline
    Sheet {
        #[serde(flatten)]
        params: SheetParams,
    },
    /// Stretch to the exact output dimensions (parallax layers)
    Stretch {
        #[serde(default)]
        background: Option<BackgroundParams>,
    },
    /// Crop to content and center inside a square canvas (objects)
    Contain {
        #[serde(flatten)]
        params: ContainParams,
    },
    /// Cut the border margin and stretch to a square (tiles)
    Tile {
        #[serde(flatten)]
        params: TileParams,
    },
}

/// One source image and the contract its output must meet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Source path relative to the input root
    pub source: String,
    /// Output path relative to the output root; defaults to `source`
    #[serde(default)]
    pub output: Option<String>,
    /// Required output width in pixels
    pub width: u32,
    /// Required output height in pixels
    pub height: u32,
    #[serde(flatten)]
    pub mode: AssetMode,
}

impl AssetEntry {
    pub fn output_rel(&self) -> &str {
        self.output.as_deref().unwrap_or(&self.source)
    }

    pub fn expected_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub assets: Vec<AssetEntry>,
}

impl Manifest {
    /// Load a JSON manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| Error::Processing(format!("manifest {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BackgroundStrategy;

    #[test]
    fn parses_sheet_entries() {
        let json = r#"{
            "assets": [
                {
                    "source": "player/walk.png",
                    "width": 384,
                    "height": 64,
                    "mode": "sheet",
                    "frame_count": 6,
                    "frame_size": 64,
                    "strategy": "saturation_keep",
                    "saturation_threshold": 25
                },
                {
                    "source": "backgrounds/sky.png",
                    "width": 800,
                    "height": 600,
                    "mode": "stretch"
                }
            ]
        }"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.assets.len(), 2);

        match &manifest.assets[0].mode {
            AssetMode::Sheet { params } => {
                assert_eq!(params.frame_count, 6);
                assert_eq!(params.background.strategy, BackgroundStrategy::SaturationKeep);
                // Unlisted fields fall back to defaults
                assert_eq!(params.min_gap, 5);
            }
            other => panic!("expected sheet mode, got {:?}", other),
        }
        match &manifest.assets[1].mode {
            AssetMode::Stretch { background } => assert!(background.is_none()),
            other => panic!("expected stretch mode, got {:?}", other),
        }
    }

    #[test]
    fn output_defaults_to_source() {
        let entry = AssetEntry {
            source: "tiles/dirt.png".into(),
            output: None,
            width: 64,
            height: 64,
            mode: AssetMode::Tile {
                params: TileParams::default(),
            },
        };
        assert_eq!(entry.output_rel(), "tiles/dirt.png");
        assert_eq!(entry.expected_size(), (64, 64));
    }
}
