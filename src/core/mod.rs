//! Core processing building blocks: background classification, span
//! segmentation, frame normalization, sheet assembly, and the per-asset
//! parameter and manifest types. These are internal primitives consumed
//! by the high-level `api` module.
pub mod manifest;
pub mod params;
pub mod processing;
