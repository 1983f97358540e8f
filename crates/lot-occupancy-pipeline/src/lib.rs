//! Occupancy survey pipeline: rectify every configured spot of one frame,
//! classify the patches, aggregate the verdicts.
//!
//! Spot geometry is run configuration handed in by the caller; nothing in
//! this crate hard-codes a lot layout. A failed spot (degenerate geometry,
//! engine error) is recorded with its index and excluded from the counts;
//! one bad entry never blinds the rest of the lot.

mod aggregate;
mod extract;
mod spot;
mod survey;

pub use aggregate::{aggregate, OccupancyCounts};
pub use lot_occupancy_classify::SpotDecision;
pub use lot_occupancy_core::RectifyError;
pub use extract::{extract_patch, extract_patches, SpotError};
pub use spot::{QuadValidationError, SpotQuad};
pub use survey::{LotSurvey, LotSurveyor, SpotFailure, SurveyError, SurveyParams};
