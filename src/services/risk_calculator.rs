use tracing::{debug, warn};

use crate::config::ScoringConfig;
use crate::models::{
    ClimateObservation, MigrationRiskScore, RiskAssessment, RiskFactors, RiskLevel,
    SeverityBand, TrendDirection,
};
use crate::services::{NoiseSource, RecommendationTable, TrendAnalyzer};
use crate::utils::math::{capped_linear, round_to_score};

const MAX_REPORTED_SCORE: u32 = 100;

/// Climate migration risk scoring.
///
/// Holds only immutable configuration, so one calculator can be shared
/// freely. The single non-deterministic input, the economic noise term, is
/// passed in per call.
#[derive(Debug, Clone)]
pub struct RiskCalculator {
    config: ScoringConfig,
    recommendations: RecommendationTable,
}

impl RiskCalculator {
    pub fn new(config: ScoringConfig) -> Self {
        let recommendations = RecommendationTable::new(config.recommendations.clone());
        Self {
            config,
            recommendations,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Hazard sub-score in `[0, 100]` from a single observation.
    pub fn climate_risk(&self, obs: &ClimateObservation) -> f64 {
        let score = self.temperature_points(obs.temperature)
            + self.humidity_points(obs.humidity)
            + self.rainfall_points(obs.rainfall)
            + self.sea_level_points(obs.sea_level)
            + self.extreme_event_points(obs.extreme_event_count)
            + self.air_quality_points(obs.air_quality_index);

        score.min(self.config.climate.max_score)
    }

    fn temperature_points(&self, temperature: f64) -> f64 {
        let bands = &self.config.climate.temperature;
        if temperature > bands.extreme_heat.threshold {
            bands.extreme_heat.points
        } else if temperature > bands.heat.threshold {
            bands.heat.points
        } else if temperature < bands.freezing.threshold {
            bands.freezing.points
        } else if temperature < bands.cold.threshold {
            bands.cold.points
        } else {
            0.0
        }
    }

    fn humidity_points(&self, humidity: f64) -> f64 {
        let bands = &self.config.climate.humidity;
        if humidity > bands.very_humid.threshold {
            bands.very_humid.points
        } else if humidity > bands.humid.threshold {
            bands.humid.points
        } else if humidity < bands.very_dry.threshold {
            bands.very_dry.points
        } else if humidity < bands.dry.threshold {
            bands.dry.points
        } else {
            0.0
        }
    }

    // A measured zero is a risk signal in its own right, distinct from both
    // drought and a missing measurement.
    fn rainfall_points(&self, rainfall: Option<f64>) -> f64 {
        let Some(rainfall) = rainfall else {
            return 0.0;
        };
        let bands = &self.config.climate.rainfall;
        if rainfall > bands.extreme.threshold {
            bands.extreme.points
        } else if rainfall > bands.heavy.threshold {
            bands.heavy.points
        } else if rainfall > 0.0 && rainfall < bands.drought.threshold {
            bands.drought.points
        } else if rainfall == 0.0 {
            bands.no_rainfall_points
        } else {
            0.0
        }
    }

    fn sea_level_points(&self, sea_level: f64) -> f64 {
        if sea_level <= 0.0 {
            return 0.0;
        }
        let rule = &self.config.climate.sea_level;
        capped_linear(sea_level, rule.multiplier, rule.cap)
    }

    fn extreme_event_points(&self, count: u32) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let rule = &self.config.climate.extreme_events;
        capped_linear(f64::from(count), rule.multiplier, rule.cap)
    }

    fn air_quality_points(&self, index: u32) -> f64 {
        let bands = &self.config.climate.air_quality;
        let index = f64::from(index);
        if index > bands.unhealthy.threshold {
            bands.unhealthy.points
        } else if index > bands.sensitive.threshold {
            bands.sensitive.points
        } else if index > bands.moderate.threshold {
            bands.moderate.points
        } else {
            0.0
        }
    }

    /// Combine climate risk, economic impact, population pressure and
    /// vulnerability into a single score and tier.
    ///
    /// `population` of `None` or zero falls back to the configured default.
    pub fn migration_risk<N: NoiseSource + ?Sized>(
        &self,
        obs: &ClimateObservation,
        population: Option<u64>,
        noise: &mut N,
    ) -> MigrationRiskScore {
        let population = self.resolve_population(population);

        let climate_risk = self.climate_risk(obs);

        let economic = &self.config.economic;
        let economic_impact = (climate_risk * economic.climate_factor
            + noise.sample(economic.noise_span)
            + economic.baseline)
            .min(economic.cap);

        let density = &self.config.population;
        let population_density = (population as f64 / density.divisor).min(density.cap);

        let mix = &self.config.vulnerability;
        let vulnerability_index = climate_risk * mix.climate + economic_impact * mix.economic;

        let weights = &self.config.weights;
        let total_risk = climate_risk * weights.climate
            + economic_impact * weights.economic
            + population_density * weights.population
            + vulnerability_index * weights.vulnerability;

        let risk_level = self.classify_tier(total_risk);

        debug!(
            climate_risk,
            economic_impact,
            population_density,
            vulnerability_index,
            total_risk,
            "Migration risk classified as {}",
            risk_level
        );

        MigrationRiskScore {
            risk_score: round_to_score(total_risk, MAX_REPORTED_SCORE),
            risk_level,
            factors: RiskFactors {
                climate_risk: round_to_score(climate_risk, MAX_REPORTED_SCORE),
                economic_impact: round_to_score(economic_impact, MAX_REPORTED_SCORE),
                population_density: round_to_score(population_density, MAX_REPORTED_SCORE),
                vulnerability_index: round_to_score(vulnerability_index, MAX_REPORTED_SCORE),
            },
            total_risk,
        }
    }

    fn resolve_population(&self, population: Option<u64>) -> u64 {
        match population {
            Some(count) if count > 0 => count,
            _ => {
                let fallback = self.config.population.default_population;
                warn!("Population unavailable, using default of {}", fallback);
                fallback
            }
        }
    }

    /// Step function on the unrounded total; each threshold belongs to the
    /// higher tier.
    pub fn classify_tier(&self, score: f64) -> RiskLevel {
        let tiers = &self.config.tiers;
        if score >= tiers.critical {
            RiskLevel::Critical
        } else if score >= tiers.high {
            RiskLevel::High
        } else if score >= tiers.moderate {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn recommendations_for(&self, level: RiskLevel) -> Vec<String> {
        self.recommendations.for_level(level).to_vec()
    }

    pub fn recommendations_for_label(&self, label: &str) -> Vec<String> {
        self.recommendations.for_label(label).to_vec()
    }

    pub fn severity_band(&self, score: f64) -> SeverityBand {
        let bands = &self.config.severity;
        if score >= bands.extreme {
            SeverityBand::Extreme
        } else if score >= bands.critical {
            SeverityBand::Critical
        } else if score >= bands.high {
            SeverityBand::High
        } else if score >= bands.moderate {
            SeverityBand::Moderate
        } else if score >= bands.low {
            SeverityBand::Low
        } else {
            SeverityBand::Minimal
        }
    }

    pub fn describe_severity(&self, score: f64) -> &'static str {
        self.severity_band(score).description()
    }

    pub fn analyze_trend(&self, series: &[ClimateObservation]) -> TrendDirection {
        TrendAnalyzer::new(self).analyze(series)
    }

    /// Score an observation and attach the guidance for its tier.
    pub fn assess<N: NoiseSource + ?Sized>(
        &self,
        obs: &ClimateObservation,
        population: Option<u64>,
        noise: &mut N,
    ) -> RiskAssessment {
        let score = self.migration_risk(obs, population, noise);
        let recommendations = self.recommendations_for(score.risk_level);
        score.with_recommendations(recommendations)
    }
}

impl Default for RiskCalculator {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{FixedNoise, MidpointNoise};

    fn calm() -> ClimateObservation {
        ClimateObservation::new(22.0, 50.0, 40.0)
    }

    #[test]
    fn calm_conditions_score_zero() {
        let calculator = RiskCalculator::default();
        assert_eq!(calculator.climate_risk(&calm().with_air_quality(30)), 0.0);
    }

    #[test]
    fn extreme_conditions_are_capped() {
        let calculator = RiskCalculator::default();
        let obs = ClimateObservation::new(38.0, 85.0, 250.0)
            .with_sea_level(5.0)
            .with_extreme_events(3)
            .with_air_quality(160);
        assert_eq!(calculator.climate_risk(&obs), 100.0);
    }

    #[test]
    fn temperature_bands_check_heat_before_cold() {
        let calculator = RiskCalculator::default();
        let score = |t: f64| calculator.climate_risk(&ClimateObservation::new(t, 50.0, 40.0));
        assert_eq!(score(36.0), 25.0);
        assert_eq!(score(35.0), 15.0);
        assert_eq!(score(30.5), 15.0);
        assert_eq!(score(30.0), 0.0);
        assert_eq!(score(4.9), 5.0);
        assert_eq!(score(-0.1), 10.0);
        assert_eq!(score(0.0), 5.0);
    }

    #[test]
    fn humidity_bands() {
        let calculator = RiskCalculator::default();
        let score = |h: f64| calculator.climate_risk(&ClimateObservation::new(22.0, h, 40.0));
        assert_eq!(score(81.0), 15.0);
        assert_eq!(score(80.0), 10.0);
        assert_eq!(score(70.0), 0.0);
        assert_eq!(score(19.0), 10.0);
        assert_eq!(score(25.0), 5.0);
        assert_eq!(score(30.0), 0.0);
    }

    #[test]
    fn rainfall_bands_distinguish_drought_from_no_rain() {
        let calculator = RiskCalculator::default();
        let score = |r: f64| calculator.climate_risk(&ClimateObservation::new(22.0, 50.0, r));
        assert_eq!(score(201.0), 20.0);
        assert_eq!(score(200.0), 15.0);
        assert_eq!(score(100.0), 0.0);
        assert_eq!(score(10.0), 0.0);
        assert_eq!(score(9.9), 15.0);
        assert_eq!(score(0.5), 15.0);
        assert_eq!(score(0.0), 10.0);
    }

    #[test]
    fn missing_rainfall_scores_nothing() {
        let calculator = RiskCalculator::default();
        let input = crate::models::ObservationInput {
            temperature: Some(22.0),
            humidity: Some(50.0),
            ..Default::default()
        };
        let obs = input.into_observation().unwrap();
        assert_eq!(calculator.climate_risk(&obs), 0.0);
        assert_eq!(calculator.climate_risk(&calm().without_rainfall()), 0.0);
        assert_eq!(
            calculator.climate_risk(&ClimateObservation::new(22.0, 50.0, 0.0)),
            10.0
        );
    }

    #[test]
    fn sea_level_and_events_are_capped_linear() {
        let calculator = RiskCalculator::default();
        assert_eq!(calculator.climate_risk(&calm().with_sea_level(3.0)), 6.0);
        assert_eq!(calculator.climate_risk(&calm().with_sea_level(40.0)), 15.0);
        assert_eq!(calculator.climate_risk(&calm().with_extreme_events(2)), 10.0);
        assert_eq!(calculator.climate_risk(&calm().with_extreme_events(12)), 25.0);
    }

    #[test]
    fn air_quality_bands() {
        let calculator = RiskCalculator::default();
        let score = |aqi: u32| calculator.climate_risk(&calm().with_air_quality(aqi));
        assert_eq!(score(151), 15.0);
        assert_eq!(score(150), 10.0);
        assert_eq!(score(101), 10.0);
        assert_eq!(score(100), 5.0);
        assert_eq!(score(51), 5.0);
        assert_eq!(score(50), 0.0);
    }

    #[test]
    fn classify_tier_boundaries_belong_to_higher_tier() {
        let calculator = RiskCalculator::default();
        assert_eq!(calculator.classify_tier(24.9), RiskLevel::Low);
        assert_eq!(calculator.classify_tier(25.0), RiskLevel::Moderate);
        assert_eq!(calculator.classify_tier(49.9), RiskLevel::Moderate);
        assert_eq!(calculator.classify_tier(50.0), RiskLevel::High);
        assert_eq!(calculator.classify_tier(74.9), RiskLevel::High);
        assert_eq!(calculator.classify_tier(75.0), RiskLevel::Critical);
    }

    #[test]
    fn migration_risk_with_midpoint_noise() {
        let calculator = RiskCalculator::default();
        // climate 0 -> economic 0 + 10 + 10 = 20, density 50, vulnerability 10
        let score = calculator.migration_risk(&calm(), Some(500_000), &mut MidpointNoise);
        assert_eq!(
            score.factors,
            RiskFactors {
                climate_risk: 0,
                economic_impact: 20,
                population_density: 50,
                vulnerability_index: 10,
            }
        );
        // 0 * 0.4 + 20 * 0.3 + 50 * 0.15 + 10 * 0.15 = 15
        assert!((score.total_risk - 15.0).abs() < 1e-9);
        assert_eq!(score.risk_score, 15);
        assert_eq!(score.risk_level, RiskLevel::Low);
    }

    #[test]
    fn population_density_is_capped() {
        let calculator = RiskCalculator::default();
        let score = calculator.migration_risk(&calm(), Some(2_000_000), &mut FixedNoise(0.0));
        assert_eq!(score.factors.population_density, 50);
    }

    #[test]
    fn missing_population_uses_default() {
        let calculator = RiskCalculator::default();
        let default = calculator.migration_risk(&calm(), None, &mut FixedNoise(4.0));
        let zero = calculator.migration_risk(&calm(), Some(0), &mut FixedNoise(4.0));
        let explicit = calculator.migration_risk(&calm(), Some(1_000_000), &mut FixedNoise(4.0));
        assert_eq!(default, explicit);
        assert_eq!(zero, explicit);
        assert_eq!(default.factors.population_density, 50);
    }

    #[test]
    fn economic_impact_is_capped() {
        let calculator = RiskCalculator::default();
        let obs = ClimateObservation::new(38.0, 85.0, 250.0)
            .with_sea_level(5.0)
            .with_extreme_events(3)
            .with_air_quality(160);
        let score = calculator.migration_risk(&obs, None, &mut FixedNoise(20.0));
        assert_eq!(score.factors.economic_impact, 90);

        let mut config = ScoringConfig::default();
        config.economic.baseline = 50.0;
        let score = RiskCalculator::new(config).migration_risk(&obs, None, &mut FixedNoise(20.0));
        assert_eq!(score.factors.economic_impact, 100);
    }

    #[test]
    fn severity_descriptions() {
        let calculator = RiskCalculator::default();
        assert_eq!(calculator.describe_severity(95.0), "Extreme - Catastrophic conditions");
        assert_eq!(calculator.describe_severity(90.0), "Extreme - Catastrophic conditions");
        assert_eq!(calculator.describe_severity(75.0), "Critical - Severe threat to population");
        assert_eq!(calculator.describe_severity(60.0), "High - Major concerns for safety");
        assert_eq!(calculator.describe_severity(40.0), "Moderate - Notable climate impacts");
        assert_eq!(calculator.describe_severity(20.0), "Low - Minor climate concerns");
        assert_eq!(calculator.describe_severity(10.0), "Minimal - Stable conditions");
    }

    #[test]
    fn assess_attaches_tier_guidance() {
        let calculator = RiskCalculator::default();
        let assessment = calculator.assess(&calm(), None, &mut MidpointNoise);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert_eq!(
            assessment.recommendations,
            calculator.recommendations_for(RiskLevel::Low)
        );
    }
}
