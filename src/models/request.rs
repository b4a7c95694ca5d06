use serde::{Deserialize, Serialize};

use crate::models::{ObservationInput, RiskAssessment, TrendDirection};

/// A location's latest reading plus whatever history and demographics the
/// caller could gather.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentRequest {
    pub observation: Option<ObservationInput>,
    pub population: Option<u64>,
    /// Oldest first.
    pub history: Vec<ObservationInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub assessment: RiskAssessment,
    pub severity: String,
    pub trend: TrendDirection,
}
