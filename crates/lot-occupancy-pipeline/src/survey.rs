use lot_occupancy_classify::{OccupancyClassifier, SpotDecision};
use lot_occupancy_core::RgbFrameView;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{extract_patch, OccupancyCounts, SpotError, SpotQuad};

fn default_patch_size() -> usize {
    128
}

/// Survey settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SurveyParams {
    /// Side length of the square patch handed to the classifier. Must match
    /// the classifier's configured input size.
    #[serde(default = "default_patch_size")]
    pub patch_size: usize,
}

impl Default for SurveyParams {
    fn default() -> Self {
        Self {
            patch_size: default_patch_size(),
        }
    }
}

/// One spot that could not be processed, with the offending index into the
/// configured quad list.
#[derive(Debug)]
pub struct SpotFailure {
    pub spot: usize,
    pub error: SpotError,
}

/// Frame-level failures. Unlike per-spot errors these abort the whole run:
/// no spot processing is meaningful without a usable frame.
#[derive(thiserror::Error, Debug)]
pub enum SurveyError {
    #[error("frame has no pixels ({width}x{height})")]
    EmptyFrame { width: usize, height: usize },
}

/// Output of one survey run.
///
/// Invariants: `counts.total() == decisions.len()`, and
/// `decisions.len() + failures.len()` equals the number of configured quads.
#[derive(Debug)]
pub struct LotSurvey {
    pub counts: OccupancyCounts,
    /// Per-spot verdicts, `(quad index, decision)`, in processing order.
    pub decisions: Vec<(usize, SpotDecision)>,
    /// Spots excluded from the counts, with the reason.
    pub failures: Vec<SpotFailure>,
}

/// Sequences rectification, classification and aggregation over a frame's
/// configured spot list. Spots are independent: any per-spot error is
/// recorded and the run continues.
pub struct LotSurveyor {
    classifier: OccupancyClassifier,
    params: SurveyParams,
}

impl LotSurveyor {
    /// Build a surveyor whose patch size follows the classifier's input size.
    pub fn new(classifier: OccupancyClassifier) -> Self {
        let params = SurveyParams {
            patch_size: classifier.input_size(),
        };
        Self::with_params(classifier, params)
    }

    pub fn with_params(classifier: OccupancyClassifier, params: SurveyParams) -> Self {
        Self { classifier, params }
    }

    #[inline]
    pub fn params(&self) -> &SurveyParams {
        &self.params
    }

    /// Survey one frame against the configured spot list.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, frame, quads), fields(
            width = frame.width,
            height = frame.height,
            spots = quads.len()
        ))
    )]
    pub fn survey(
        &self,
        frame: &RgbFrameView<'_>,
        quads: &[SpotQuad],
    ) -> Result<LotSurvey, SurveyError> {
        if frame.width == 0 || frame.height == 0 {
            return Err(SurveyError::EmptyFrame {
                width: frame.width,
                height: frame.height,
            });
        }

        let mut counts = OccupancyCounts::default();
        let mut decisions = Vec::with_capacity(quads.len());
        let mut failures = Vec::new();

        for (spot, quad) in quads.iter().enumerate() {
            match self.process_spot(frame, quad) {
                Ok(decision) => {
                    counts.record(decision);
                    decisions.push((spot, decision));
                }
                Err(error) => {
                    log::warn!("spot {spot} skipped: {error}");
                    failures.push(SpotFailure { spot, error });
                }
            }
        }

        log::info!(
            "surveyed {} spots: {} occupied, {} vacant, {} failed",
            quads.len(),
            counts.occupied,
            counts.vacant,
            failures.len()
        );

        Ok(LotSurvey {
            counts,
            decisions,
            failures,
        })
    }

    fn process_spot(
        &self,
        frame: &RgbFrameView<'_>,
        quad: &SpotQuad,
    ) -> Result<SpotDecision, SpotError> {
        let patch = extract_patch(frame, quad, self.params.patch_size)?;
        Ok(self.classifier.classify(&patch.as_view())?)
    }
}
