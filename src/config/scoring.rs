use serde::{Deserialize, Serialize};

/// A threshold and the points awarded once it is crossed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub threshold: f64,
    pub points: f64,
}

impl Band {
    pub const fn new(threshold: f64, points: f64) -> Self {
        Self { threshold, points }
    }
}

/// `min(value * multiplier, cap)`, used for sea level and extreme events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CappedLinear {
    pub multiplier: f64,
    pub cap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureBands {
    /// Strictly above.
    pub extreme_heat: Band,
    pub heat: Band,
    /// Strictly below.
    pub freezing: Band,
    pub cold: Band,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumidityBands {
    pub very_humid: Band,
    pub humid: Band,
    pub very_dry: Band,
    pub dry: Band,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainfallBands {
    pub extreme: Band,
    pub heavy: Band,
    /// Applies to rainfall strictly between zero and the threshold.
    pub drought: Band,
    pub no_rainfall_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityBands {
    pub unhealthy: Band,
    pub sensitive: Band,
    pub moderate: Band,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateScoring {
    pub temperature: TemperatureBands,
    pub humidity: HumidityBands,
    pub rainfall: RainfallBands,
    pub sea_level: CappedLinear,
    pub extreme_events: CappedLinear,
    pub air_quality: AirQualityBands,
    pub max_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicModel {
    pub climate_factor: f64,
    pub baseline: f64,
    /// Width of the noise term; the sampled value lies in [0, noise_span).
    pub noise_span: f64,
    pub cap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationModel {
    pub divisor: f64,
    pub cap: f64,
    /// Used when no demographic figure is available.
    pub default_population: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityMix {
    pub climate: f64,
    pub economic: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationWeights {
    pub climate: f64,
    pub economic: f64,
    pub population: f64,
    pub vulnerability: f64,
}

impl AggregationWeights {
    pub fn total(&self) -> f64 {
        self.climate + self.economic + self.population + self.vulnerability
    }
}

/// Inclusive lower bounds of each tier above `Low`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub moderate: f64,
    pub high: f64,
    pub critical: f64,
}

/// Inclusive lower bounds of each severity band above `Minimal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityThresholds {
    pub low: f64,
    pub moderate: f64,
    pub high: f64,
    pub critical: f64,
    pub extreme: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSettings {
    pub window: usize,
    pub tolerance: f64,
}

/// Ordered guidance per tier, most urgent action first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationLists {
    pub low: Vec<String>,
    pub moderate: Vec<String>,
    pub high: Vec<String>,
    pub critical: Vec<String>,
}

/// Every constant the scoring pipeline depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub climate: ClimateScoring,
    pub economic: EconomicModel,
    pub population: PopulationModel,
    pub vulnerability: VulnerabilityMix,
    pub weights: AggregationWeights,
    pub tiers: TierThresholds,
    pub severity: SeverityThresholds,
    pub trend: TrendSettings,
    pub recommendations: RecommendationLists,
}

const CRITICAL_ACTIONS: [&str; 6] = [
    "Immediate evacuation planning required",
    "Establish emergency shelters and safe zones",
    "Deploy disaster response teams",
    "International aid coordination needed",
    "Emergency food and water distribution systems",
    "Medical emergency preparedness",
];

const HIGH_ACTIONS: [&str; 6] = [
    "Monitor situation closely with real-time updates",
    "Prepare evacuation routes and transport",
    "Stockpile emergency supplies",
    "Community awareness and training programs",
    "Strengthen critical infrastructure",
    "Establish early warning systems",
];

const MODERATE_ACTIONS: [&str; 6] = [
    "Strengthen infrastructure for climate resilience",
    "Implement climate adaptation measures",
    "Deploy early warning systems",
    "Community preparedness training",
    "Develop sustainable water management",
    "Create climate action plans",
];

const LOW_ACTIONS: [&str; 6] = [
    "Regular monitoring of climate indicators",
    "Preventive maintenance measures",
    "Climate resilience building programs",
    "Sustainable development focus",
    "Community education on climate change",
    "Long-term adaptation planning",
];

fn owned(actions: &[&str]) -> Vec<String> {
    actions.iter().map(|s| s.to_string()).collect()
}

impl Default for RecommendationLists {
    fn default() -> Self {
        Self {
            low: owned(&LOW_ACTIONS),
            moderate: owned(&MODERATE_ACTIONS),
            high: owned(&HIGH_ACTIONS),
            critical: owned(&CRITICAL_ACTIONS),
        }
    }
}

impl Default for ClimateScoring {
    fn default() -> Self {
        Self {
            temperature: TemperatureBands {
                extreme_heat: Band::new(35.0, 25.0),
                heat: Band::new(30.0, 15.0),
                freezing: Band::new(0.0, 10.0),
                cold: Band::new(5.0, 5.0),
            },
            humidity: HumidityBands {
                very_humid: Band::new(80.0, 15.0),
                humid: Band::new(70.0, 10.0),
                very_dry: Band::new(20.0, 10.0),
                dry: Band::new(30.0, 5.0),
            },
            rainfall: RainfallBands {
                extreme: Band::new(200.0, 20.0),
                heavy: Band::new(100.0, 15.0),
                drought: Band::new(10.0, 15.0),
                no_rainfall_points: 10.0,
            },
            sea_level: CappedLinear {
                multiplier: 2.0,
                cap: 15.0,
            },
            extreme_events: CappedLinear {
                multiplier: 5.0,
                cap: 25.0,
            },
            air_quality: AirQualityBands {
                unhealthy: Band::new(150.0, 15.0),
                sensitive: Band::new(100.0, 10.0),
                moderate: Band::new(50.0, 5.0),
            },
            max_score: 100.0,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            climate: ClimateScoring::default(),
            economic: EconomicModel {
                climate_factor: 0.6,
                baseline: 10.0,
                noise_span: 20.0,
                cap: 100.0,
            },
            population: PopulationModel {
                divisor: 10_000.0,
                cap: 50.0,
                default_population: 1_000_000,
            },
            vulnerability: VulnerabilityMix {
                climate: 0.5,
                economic: 0.5,
            },
            weights: AggregationWeights {
                climate: 0.40,
                economic: 0.30,
                population: 0.15,
                vulnerability: 0.15,
            },
            tiers: TierThresholds {
                moderate: 25.0,
                high: 50.0,
                critical: 75.0,
            },
            severity: SeverityThresholds {
                low: 20.0,
                moderate: 40.0,
                high: 60.0,
                critical: 75.0,
                extreme: 90.0,
            },
            trend: TrendSettings {
                window: 3,
                tolerance: 10.0,
            },
            recommendations: RecommendationLists::default(),
        }
    }
}
