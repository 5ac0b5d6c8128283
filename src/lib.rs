#![doc = r#"
SPRITEPRO — a sprite-sheet segmentation and frame normalization toolkit.

This crate turns hand-authored sprite sheets, with frames scattered at
uneven offsets and backgrounds faked by white fills or checkerboard
patterns, into uniform horizontal strips (fixed frame count, fixed square
frame size, common ground line) ready for a 2D game engine. It powers the
SPRITEPRO CLI and can be embedded in your own asset pipelines.

The pipeline
------------
Each asset runs through six strictly-forward stages:

1. background classification (several interchangeable heuristics),
2. per-column content profiling,
3. span segmentation with deterministic count reconciliation,
4. per-span vertical bounds resolution,
5. frame normalization (crop, uniform scale, aligned paste),
6. horizontal sheet assembly.

Quick start: process a sheet to a file
--------------------------------------
```rust,no_run
use std::path::Path;
use spritepro::{process_sheet_to_path, SheetParams};

fn main() -> spritepro::Result<()> {
    let params = SheetParams {
        frame_count: 6,
        frame_size: 64,
        ..SheetParams::default()
    };

    process_sheet_to_path(
        Path::new("resources/player/walk.png"),
        Path::new("assets/player/walk.png"),
        &params,
    )
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use spritepro::{process_manifest_to_path, verify_outputs, Manifest};

fn main() -> spritepro::Result<()> {
    let manifest = Manifest::load(Path::new("assets.json"))?;
    let report = process_manifest_to_path(
        &manifest,
        Path::new("resources"),
        Path::new("assets"),
        true, // continue_on_error
    )?;
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );

    let check = verify_outputs(&manifest, Path::new("assets"));
    assert!(check.passed());
    Ok(())
}
```

Error handling
--------------
All public functions return `spritepro::Result<T>`; match on
`spritepro::Error` to handle specific cases, e.g. a missing source image.
Recoverable conditions are not errors: an image with no detectable content
falls back to even-width division, and an unusable sprite region becomes a
fully transparent frame, so frame count and ordering survive end to end.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — params, manifest, and the processing primitives.
- [`verify`] — read-only output verification against the manifest.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;
pub mod verify;

pub use api::{
    BatchReport, process_manifest_to_path, process_sheet_to_buffer, process_sheet_to_path,
};
pub use core::manifest::{AssetEntry, AssetMode, Manifest};
pub use core::params::{BackgroundParams, ContainParams, SheetParams, TileParams};
pub use core::processing::bounds::SpriteBounds;
pub use core::processing::segment::Span;
pub use error::{Error, Result};
pub use types::{Alignment, BackgroundStrategy, ScanMode};
pub use verify::{AssetStatus, VerifyReport, verify_outputs};
