//! High-level facade for the `lot-occupancy-*` workspace.
//!
//! Estimates parking-lot occupancy from a single camera frame: each
//! configured quadrilateral spot is rectified into a fronto-parallel patch,
//! classified occupied/vacant by a pluggable inference engine, and tallied.
//!
//! ## Quickstart
//!
//! ```no_run
//! use std::sync::Arc;
//! use lot_occupancy::classify::{InferenceEngine, InferenceError, OccupancyClassifier};
//! use lot_occupancy::pipeline::LotSurveyor;
//!
//! # struct MyEngine;
//! # impl InferenceEngine for MyEngine {
//! #     fn run(&self, _: &[f32], _: usize, _: usize) -> Result<[f32; 2], InferenceError> {
//! #         Ok([1.0, 0.0])
//! #     }
//! # }
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frame = lot_occupancy::decode::load_frame("lot.jpg")?;
//! let quads = lot_occupancy::spots::load_spots_json("spots.json")?;
//!
//! let engine = Arc::new(MyEngine);
//! let surveyor = LotSurveyor::new(OccupancyClassifier::new(engine));
//! let survey = surveyor.survey(&frame.as_view(), &quads)?;
//! println!("{} occupied / {} vacant", survey.counts.occupied, survey.counts.vacant);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`core`]: raster types, homography, quad rectification.
//! - [`classify`]: inference-engine boundary and the decision rule.
//! - [`pipeline`]: spot quads, extraction, aggregation, the surveyor.
//! - [`decode`] (feature `image`): compressed bytes -> RGB frame.
//! - [`spots`]: spot-geometry JSON loading.
//! - [`archive`]: fire-and-forget frame archival seam.
//! - [`report`]: serializable survey reports.

pub use lot_occupancy_classify as classify;
pub use lot_occupancy_core as core;
pub use lot_occupancy_pipeline as pipeline;

pub use lot_occupancy_classify::{OccupancyClassifier, SpotDecision};
pub use lot_occupancy_core::{RgbFrame, RgbFrameView};
pub use lot_occupancy_pipeline::{LotSurvey, LotSurveyor, OccupancyCounts, SpotQuad};

pub mod archive;
#[cfg(feature = "image")]
pub mod decode;
pub mod report;
pub mod spots;
