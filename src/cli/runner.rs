use tracing::info;

use spritepro::api::{process_manifest_to_path, process_sheet_to_path};
use spritepro::core::manifest::Manifest;
use spritepro::core::params::{BackgroundParams, SheetParams};
use spritepro::verify::verify_outputs;

use super::args::CliArgs;
use super::errors::AppError;

fn sheet_params_from_args(args: &CliArgs) -> Result<SheetParams, AppError> {
    if args.frames == 0 {
        return Err(AppError::InvalidFrameCount { frames: args.frames });
    }
    if !(args.fill_ratio > 0.0 && args.fill_ratio <= 1.0) {
        return Err(AppError::InvalidFillRatio {
            ratio: args.fill_ratio,
        });
    }

    Ok(SheetParams {
        frame_count: args.frames,
        frame_size: args.frame_size,
        background: BackgroundParams {
            strategy: args.background,
            white_threshold: args.white_threshold,
            tolerance: args.tolerance,
            saturation_threshold: args.saturation_threshold,
            soft_band: args.soft_band,
        },
        scan_mode: args.scan_mode,
        scan_row: args.scan_row,
        alpha_threshold: args.alpha_threshold,
        min_gap: args.min_gap,
        min_span_width: args.min_span_width,
        padding: args.padding,
        fill_ratio: args.fill_ratio,
        bottom_margin: args.bottom_margin,
        ..SheetParams::default()
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let batch_mode = args.manifest.is_some() || args.input_dir.is_some();

    if batch_mode {
        let manifest_path = args.manifest.as_ref().ok_or(AppError::MissingArgument {
            arg: "--manifest".to_string(),
        })?;
        let output_dir = args.output_dir.as_ref().ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;
        let manifest = Manifest::load(manifest_path).map_err(AppError::Processing)?;

        if !args.verify {
            let input_dir = args.input_dir.as_ref().ok_or(AppError::MissingArgument {
                arg: "--input-dir".to_string(),
            })?;

            info!("Starting batch processing from directory: {:?}", input_dir);
            info!("Output directory: {:?}", output_dir);

            let report = process_manifest_to_path(
                &manifest,
                input_dir,
                output_dir,
                args.continue_on_error,
            )
            .map_err(AppError::Processing)?;

            info!("Batch processing complete!");
            info!("Processed: {}", report.processed);
            info!("Skipped: {}", report.skipped);
            info!("Errors: {}", report.errors);
        }

        let report = verify_outputs(&manifest, output_dir);
        for (path, status) in &report.entries {
            println!("  {}: {}", status, path);
        }
        println!(
            "Verified {} assets, {} failures",
            report.checked(),
            report.failures
        );
        if !report.passed() {
            return Err(AppError::VerificationFailed {
                failures: report.failures,
                checked: report.checked(),
            }
            .into());
        }
    } else {
        let input = args.input.as_ref().ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.as_ref().ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        let params = sheet_params_from_args(&args)?;
        process_sheet_to_path(input, output, &params).map_err(AppError::Processing)?;
        info!("Successfully processed: {:?} -> {:?}", input, output);
    }

    Ok(())
}
