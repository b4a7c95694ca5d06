use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;

/// The four contributing factors, each rounded to the nearest integer in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub climate_risk: u32,
    pub economic_impact: u32,
    pub population_density: u32,
    pub vulnerability_index: u32,
}

/// Output of migration-risk aggregation, before recommendations are attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationRiskScore {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub factors: RiskFactors,
    /// Unrounded weighted sum the tier was classified from.
    pub total_risk: f64,
}

impl MigrationRiskScore {
    pub fn with_recommendations(self, recommendations: Vec<String>) -> RiskAssessment {
        RiskAssessment {
            risk_score: self.risk_score,
            risk_level: self.risk_level,
            factors: self.factors,
            recommendations,
        }
    }
}

/// A complete assessment for one location. The caller owns persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub factors: RiskFactors,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSummary {
    pub risk_level: RiskLevel,
    pub count: usize,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentStatistics {
    pub total_assessments: usize,
    pub by_risk_level: Vec<TierSummary>,
}
