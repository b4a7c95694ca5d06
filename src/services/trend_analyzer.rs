use tracing::debug;

use crate::models::{ClimateObservation, TrendDirection};
use crate::services::RiskCalculator;
use crate::utils::math::{head_and_tail, mean};

/// Compares early and recent climate risk across an ordered history.
pub struct TrendAnalyzer<'a> {
    calculator: &'a RiskCalculator,
}

impl<'a> TrendAnalyzer<'a> {
    pub fn new(calculator: &'a RiskCalculator) -> Self {
        Self { calculator }
    }

    /// Oldest observation first. Series shorter than twice the window share
    /// entries between the early and recent averages.
    pub fn analyze(&self, series: &[ClimateObservation]) -> TrendDirection {
        if series.len() < 2 {
            return TrendDirection::InsufficientData;
        }

        let scores: Vec<f64> = series
            .iter()
            .map(|obs| self.calculator.climate_risk(obs))
            .collect();

        let settings = &self.calculator.config().trend;
        let (older, recent) = head_and_tail(&scores, settings.window);
        let older_avg = mean(older);
        let recent_avg = mean(recent);

        let direction = if recent_avg > older_avg + settings.tolerance {
            TrendDirection::Increasing
        } else if recent_avg < older_avg - settings.tolerance {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        };

        debug!(
            observations = series.len(),
            older_avg,
            recent_avg,
            "Climate risk trend: {}",
            direction
        );
        direction
    }
}
