//! Serializable survey reports for result consumers.

use std::path::Path;

use lot_occupancy_classify::SpotDecision;
use lot_occupancy_pipeline::LotSurvey;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpotVerdict {
    pub spot: usize,
    pub decision: SpotDecision,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpotFailureReport {
    pub spot: usize,
    pub error: String,
}

/// Flattened, JSON-friendly form of a [`LotSurvey`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SurveyReport {
    pub image_path: String,
    pub spots_configured: usize,
    pub occupied: u32,
    pub vacant: u32,
    pub decisions: Vec<SpotVerdict>,
    pub failures: Vec<SpotFailureReport>,
}

impl SurveyReport {
    pub fn new(image_path: impl Into<String>, survey: &LotSurvey) -> Self {
        let decisions: Vec<SpotVerdict> = survey
            .decisions
            .iter()
            .map(|&(spot, decision)| SpotVerdict { spot, decision })
            .collect();
        let failures: Vec<SpotFailureReport> = survey
            .failures
            .iter()
            .map(|f| SpotFailureReport {
                spot: f.spot,
                error: f.error.to_string(),
            })
            .collect();

        Self {
            image_path: image_path.into(),
            spots_configured: decisions.len() + failures.len(),
            occupied: survey.counts.occupied,
            vacant: survey.counts.vacant,
            decisions,
            failures,
        }
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
