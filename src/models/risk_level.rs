use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse migration-risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Exact tier name only, as stored alongside persisted assessments.
    pub fn from_label(label: &str) -> Option<RiskLevel> {
        match label {
            "Low" => Some(RiskLevel::Low),
            "Moderate" => Some(RiskLevel::Moderate),
            "High" => Some(RiskLevel::High),
            "Critical" => Some(RiskLevel::Critical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRiskLevel(pub String);

impl fmt::Display for UnknownRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown risk level: {}", self.0)
    }
}

impl std::error::Error for UnknownRiskLevel {}

impl FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "moderate" => Ok(RiskLevel::Moderate),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            _ => Err(UnknownRiskLevel(s.to_string())),
        }
    }
}

/// Direction of climate risk across a historical series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    #[serde(rename = "Insufficient data")]
    InsufficientData,
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::InsufficientData => "Insufficient data",
            TrendDirection::Increasing => "Increasing",
            TrendDirection::Decreasing => "Decreasing",
            TrendDirection::Stable => "Stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Six-band descriptive severity. Finer than `RiskLevel` and kept separate
/// from it: a tier is a category, a band is a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityBand {
    Minimal,
    Low,
    Moderate,
    High,
    Critical,
    Extreme,
}

impl SeverityBand {
    pub fn description(&self) -> &'static str {
        match self {
            SeverityBand::Extreme => "Extreme - Catastrophic conditions",
            SeverityBand::Critical => "Critical - Severe threat to population",
            SeverityBand::High => "High - Major concerns for safety",
            SeverityBand::Moderate => "Moderate - Notable climate impacts",
            SeverityBand::Low => "Low - Minor climate concerns",
            SeverityBand::Minimal => "Minimal - Stable conditions",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_parses_case_insensitively() {
        assert_eq!("critical".parse::<RiskLevel>(), Ok(RiskLevel::Critical));
        assert_eq!(" Moderate ".parse::<RiskLevel>(), Ok(RiskLevel::Moderate));
        assert!("Medium".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn from_label_requires_exact_name() {
        assert_eq!(RiskLevel::from_label("Critical"), Some(RiskLevel::Critical));
        assert_eq!(RiskLevel::from_label("critical"), None);
        assert_eq!(RiskLevel::from_label(" High "), None);
    }

    #[test]
    fn risk_levels_order_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn trend_serializes_with_display_label() {
        let json = serde_json::to_string(&TrendDirection::InsufficientData).unwrap();
        assert_eq!(json, "\"Insufficient data\"");
    }
}
