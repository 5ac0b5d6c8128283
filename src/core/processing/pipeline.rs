use image::RgbaImage;
use tracing::{debug, warn};

use crate::core::params::SheetParams;
use crate::core::processing::{background, bounds, frame, profile, segment, sheet};

/// Run the full segmentation pipeline over one decoded source image and
/// return the normalized horizontal sheet.
///
/// Stages run strictly forward: classify -> profile -> segment ->
/// resolve -> normalize -> assemble. When classification leaves no
/// content columns at all, the untouched source is divided into
/// `frame_count` even spans instead, so the output still has well-formed
/// dimensions.
pub fn extract_sheet(
    image: &RgbaImage,
    params: &SheetParams,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    let mask = background::classify(image, &params.background);
    let profile = profile::column_profile(
        &mask,
        params.scan_mode,
        params.scan_row,
        params.alpha_threshold,
    );

    let (canvas, spans) = match segment::segment(&profile, params.min_gap, params.min_span_width) {
        Some(runs) => {
            debug!("Found {} content spans (need {})", runs.len(), params.frame_count);
            (&mask, segment::reconcile(runs, params.frame_count))
        }
        None => {
            warn!("No content columns detected; falling back to even division");
            (image, segment::even_spans(mask.width(), params.frame_count))
        }
    };

    let mut frames = Vec::with_capacity(spans.len());
    for span in &spans {
        let region = bounds::resolve(canvas, *span, params.alpha_threshold);
        frames.push(frame::normalize(canvas, region, params)?);
    }

    Ok(sheet::assemble(&frames, params.frame_size))
}
