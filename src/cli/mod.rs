//! Command Line Interface (CLI) layer for SPRITEPRO.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and batch
//! processing flows, including output verification. It wires user-provided
//! options to the underlying library functionality exposed via
//! `spritepro::api`.
//!
//! If you are embedding SPRITEPRO into another application, prefer using
//! the high-level `spritepro::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
