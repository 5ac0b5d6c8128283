//! Shared types and enums used across SPRITEPRO.
//! Includes `BackgroundStrategy`, `ScanMode`, and `Alignment`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How background pixels are told apart from sprite pixels.
///
/// Hand-authored sheets fake transparency in several inconsistent ways
/// (solid white, near-white, flat grey, two-tone checkerboard), so the
/// classifier is polymorphic over a closed set of heuristics selected
/// per asset.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundStrategy {
    /// Clear near-white pixels and pixels in a fixed mid-grey band
    Luminance,
    /// Sample the four corners, clear pixels close to their average
    CornerSample,
    /// Detect the two checkerboard tones and clear pixels matching either
    Checkerboard,
    /// Keep strongly colored pixels, clear everything neutral
    SaturationKeep,
}

impl std::fmt::Display for BackgroundStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BackgroundStrategy::Luminance => "Luminance",
            BackgroundStrategy::CornerSample => "CornerSample",
            BackgroundStrategy::Checkerboard => "Checkerboard",
            BackgroundStrategy::SaturationKeep => "SaturationKeep",
        };
        write!(f, "{}", s)
    }
}

/// Column scan mode used when building the content profile.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Every row of the column is inspected
    FullColumn,
    /// Only a fixed window around a scan row is inspected; cheaper when
    /// sprites are known to be vertically centered
    Banded,
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanMode::FullColumn => write!(f, "FullColumn"),
            ScanMode::Banded => write!(f, "Banded"),
        }
    }
}

/// Where a normalized sprite sits inside its square frame.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Horizontally centered, feet on a common ground line near the bottom
    BottomCenter,
    /// Centered on both axes
    Center,
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alignment::BottomCenter => write!(f, "BottomCenter"),
            Alignment::Center => write!(f, "Center"),
        }
    }
}
