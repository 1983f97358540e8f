use lot_occupancy_classify::InferenceError;
use lot_occupancy_core::{rectify_quad, resize_bilinear, RectifyError, RgbFrame, RgbFrameView};

use crate::SpotQuad;

/// Anything that can go wrong while processing one spot. Caught at the spot
/// boundary and recorded; never aborts the rest of the frame.
#[derive(thiserror::Error, Debug)]
pub enum SpotError {
    #[error("patch extraction failed: {0}")]
    Extraction(#[from] RectifyError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Rectify one spot and resize the result to the classifier's square input
/// size with bilinear interpolation.
pub fn extract_patch(
    frame: &RgbFrameView<'_>,
    quad: &SpotQuad,
    patch_size: usize,
) -> Result<RgbFrame, SpotError> {
    let rectified = rectify_quad(frame, quad.corners())?;
    Ok(resize_bilinear(&rectified.as_view(), patch_size, patch_size))
}

/// Extract a patch per quad, preserving input order: entry `i` of the result
/// belongs to `quads[i]`. Failures stay in place as `Err` entries.
pub fn extract_patches(
    frame: &RgbFrameView<'_>,
    quads: &[SpotQuad],
    patch_size: usize,
) -> Vec<Result<RgbFrame, SpotError>> {
    quads
        .iter()
        .map(|q| extract_patch(frame, q, patch_size))
        .collect()
}
