use tracing::info;

use crate::error::AppError;
use crate::models::{AssessmentReport, AssessmentRequest, ClimateObservation};
use crate::services::{NoiseSource, RiskCalculator};

/// Validates a request at the boundary and runs the full scoring pipeline.
pub struct AssessmentService<'a> {
    calculator: &'a RiskCalculator,
}

impl<'a> AssessmentService<'a> {
    pub fn new(calculator: &'a RiskCalculator) -> Self {
        Self { calculator }
    }

    pub fn evaluate<N: NoiseSource + ?Sized>(
        &self,
        request: AssessmentRequest,
        noise: &mut N,
    ) -> Result<AssessmentReport, AppError> {
        let observation = request
            .observation
            .ok_or(AppError::MissingObservation)?
            .into_observation()?;

        let history = request
            .history
            .into_iter()
            .map(|input| input.into_observation())
            .collect::<Result<Vec<ClimateObservation>, _>>()?;

        let assessment = self
            .calculator
            .assess(&observation, request.population, noise);
        let severity = self
            .calculator
            .describe_severity(f64::from(assessment.risk_score))
            .to_string();
        let trend = self.calculator.analyze_trend(&history);

        info!(
            risk_score = assessment.risk_score,
            history = history.len(),
            "Assessment complete: {} ({})",
            assessment.risk_level,
            trend
        );

        Ok(AssessmentReport {
            assessment,
            severity,
            trend,
        })
    }
}
