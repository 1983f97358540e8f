use std::sync::Arc;

use lot_occupancy_core::RgbFrameView;
use serde::{Deserialize, Serialize};

use crate::{InferenceEngine, InferenceError};

/// Binary verdict for one parking spot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SpotDecision {
    Occupied,
    Vacant,
}

fn default_input_size() -> usize {
    128
}

fn default_normalize() -> bool {
    true
}

/// Preprocessing settings. Must match what the model was trained on: a
/// wrong layout or scaling silently degrades accuracy without any visible
/// error, so both knobs are explicit config rather than hard-coded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassifierParams {
    /// Side length of the square input patch in pixels.
    #[serde(default = "default_input_size")]
    pub input_size: usize,
    /// Scale `u8` channels into `[0, 1]` before inference.
    #[serde(default = "default_normalize")]
    pub normalize: bool,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            input_size: default_input_size(),
            normalize: default_normalize(),
        }
    }
}

/// Map a pair of class scores to a decision.
///
/// Class 0 is occupied. Ties resolve to `Occupied`: the vacant branch is
/// taken only on a strictly greater class-1 score, for output parity with
/// the original decision rule. No confidence threshold is applied.
#[inline]
pub fn decide(scores: [f32; 2]) -> SpotDecision {
    if scores[1] > scores[0] {
        SpotDecision::Vacant
    } else {
        SpotDecision::Occupied
    }
}

/// Convert a rectified RGB patch into the flattened NHWC `f32` tensor the
/// engine expects, checking the patch against the configured input size.
pub fn patch_to_nhwc(
    patch: &RgbFrameView<'_>,
    params: &ClassifierParams,
) -> Result<Vec<f32>, InferenceError> {
    if patch.width != params.input_size || patch.height != params.input_size {
        return Err(InferenceError::ShapeMismatch {
            expected: params.input_size,
            width: patch.width,
            height: patch.height,
        });
    }

    let scale = if params.normalize { 1.0 / 255.0 } else { 1.0 };
    Ok(patch.data.iter().map(|&v| v as f32 * scale).collect())
}

/// Classifier adapter: preprocessing plus decision rule around a shared,
/// read-only inference engine.
#[derive(Clone)]
pub struct OccupancyClassifier {
    engine: Arc<dyn InferenceEngine>,
    params: ClassifierParams,
}

impl OccupancyClassifier {
    pub fn new(engine: Arc<dyn InferenceEngine>) -> Self {
        Self::with_params(engine, ClassifierParams::default())
    }

    pub fn with_params(engine: Arc<dyn InferenceEngine>, params: ClassifierParams) -> Self {
        Self { engine, params }
    }

    /// Side length (pixels) the extractor must deliver patches at.
    #[inline]
    pub fn input_size(&self) -> usize {
        self.params.input_size
    }

    /// Classify one rectified patch as occupied or vacant.
    pub fn classify(&self, patch: &RgbFrameView<'_>) -> Result<SpotDecision, InferenceError> {
        let input = patch_to_nhwc(patch, &self.params)?;
        let scores = self
            .engine
            .run(&input, self.params.input_size, self.params.input_size)?;
        Ok(decide(scores))
    }
}
