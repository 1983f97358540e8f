//! Spot-geometry configuration loading.
//!
//! The wire shape is an array of quads, each four `[x, y]` corners in frame
//! pixel coordinates, ordered top-left, top-right, bottom-right,
//! bottom-left. Malformed corner order fails deserialization (see
//! [`SpotQuad`]); where the geometry comes from (file, database, request
//! payload) is the caller's business.

use std::path::Path;

use lot_occupancy_pipeline::SpotQuad;

#[derive(thiserror::Error, Debug)]
pub enum SpotConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Parse a spot list from JSON.
pub fn parse_spots_json(raw: &str) -> Result<Vec<SpotQuad>, SpotConfigError> {
    Ok(serde_json::from_str(raw)?)
}

/// Load a spot list from a JSON file.
pub fn load_spots_json(path: impl AsRef<Path>) -> Result<Vec<SpotQuad>, SpotConfigError> {
    let raw = std::fs::read_to_string(path)?;
    parse_spots_json(&raw)
}
