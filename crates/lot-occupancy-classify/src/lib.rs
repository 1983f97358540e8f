//! Occupancy classification for rectified parking-spot patches.
//!
//! The inference engine itself is a boundary: anything that can run one
//! forward pass over a fixed-shape tensor and hand back two class scores
//! implements [`InferenceEngine`]. [`OccupancyClassifier`] owns the
//! preprocessing (NHWC layout, `[0, 1]` scaling) and the decision rule, so
//! swapping engines cannot drift the decision semantics.

mod classifier;
mod engine;

#[cfg(feature = "onnx")]
mod onnx;

pub use classifier::{decide, patch_to_nhwc, ClassifierParams, OccupancyClassifier, SpotDecision};
pub use engine::{InferenceEngine, InferenceError};

#[cfg(feature = "onnx")]
pub use onnx::OnnxEngine;
