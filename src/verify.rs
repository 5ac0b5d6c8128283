//! Read-only verification of processed outputs against the manifest's
//! expected-size table. Never touches pixel data; only file presence and
//! header dimensions are checked.
use std::path::Path;

use tracing::{info, warn};

use crate::core::manifest::Manifest;

/// Outcome of checking one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Ok,
    Missing,
    WrongSize {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetStatus::Ok => write!(f, "OK"),
            AssetStatus::Missing => write!(f, "MISSING"),
            AssetStatus::WrongSize { actual, .. } => {
                write!(f, "WRONG SIZE ({}x{})", actual.0, actual.1)
            }
        }
    }
}

/// Per-asset statuses plus the aggregate failure count.
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub entries: Vec<(String, AssetStatus)>,
    pub failures: usize,
}

impl VerifyReport {
    pub fn checked(&self) -> usize {
        self.entries.len()
    }

    pub fn passed(&self) -> bool {
        self.failures == 0
    }
}

/// Check every manifest entry under `output_dir` for existence and exact
/// dimensions. Dimension mismatches are reported, never fatal here; the
/// CLI turns a failing report into a nonzero exit status.
pub fn verify_outputs(manifest: &Manifest, output_dir: &Path) -> VerifyReport {
    let mut report = VerifyReport::default();

    for entry in &manifest.assets {
        let rel = entry.output_rel();
        let path = output_dir.join(rel);
        let status = match image::image_dimensions(&path) {
            // Absent or undecodable: the engine cannot load it either way
            Err(_) => AssetStatus::Missing,
            Ok(actual) if actual == entry.expected_size() => AssetStatus::Ok,
            Ok(actual) => AssetStatus::WrongSize {
                expected: entry.expected_size(),
                actual,
            },
        };

        match status {
            AssetStatus::Ok => info!("OK: {}", rel),
            _ => {
                warn!("{}: {}", status, rel);
                report.failures += 1;
            }
        }
        report.entries.push((rel.to_string(), status));
    }

    report
}
