use tracing::debug;

use crate::config::RecommendationLists;
use crate::models::RiskLevel;

/// Immutable tier -> ordered guidance lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationTable {
    lists: RecommendationLists,
}

impl RecommendationTable {
    pub fn new(lists: RecommendationLists) -> Self {
        Self { lists }
    }

    pub fn for_level(&self, level: RiskLevel) -> &[String] {
        match level {
            RiskLevel::Low => &self.lists.low,
            RiskLevel::Moderate => &self.lists.moderate,
            RiskLevel::High => &self.lists.high,
            RiskLevel::Critical => &self.lists.critical,
        }
    }

    /// Lookup by exact tier label. Anything else, including other casings,
    /// gets the `Low` guidance.
    pub fn for_label(&self, label: &str) -> &[String] {
        match RiskLevel::from_label(label) {
            Some(level) => self.for_level(level),
            None => {
                debug!("Unknown risk level {:?}, falling back to Low", label);
                self.for_level(RiskLevel::Low)
            }
        }
    }
}

impl Default for RecommendationTable {
    fn default() -> Self {
        Self::new(RecommendationLists::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_six_items() {
        let table = RecommendationTable::default();
        for level in RiskLevel::ALL {
            assert_eq!(table.for_level(level).len(), 6, "{}", level);
        }
    }

    #[test]
    fn most_urgent_action_comes_first() {
        let table = RecommendationTable::default();
        assert_eq!(
            table.for_level(RiskLevel::Critical)[0],
            "Immediate evacuation planning required"
        );
        assert_eq!(
            table.for_level(RiskLevel::Low)[5],
            "Long-term adaptation planning"
        );
    }

    #[test]
    fn unknown_label_falls_back_to_low() {
        let table = RecommendationTable::default();
        assert_eq!(table.for_label("Severe"), table.for_level(RiskLevel::Low));
        assert_eq!(table.for_label(""), table.for_level(RiskLevel::Low));
        assert_eq!(table.for_label("High"), table.for_level(RiskLevel::High));
    }

    #[test]
    fn label_lookup_is_exact() {
        let table = RecommendationTable::default();
        assert_eq!(table.for_label("critical"), table.for_level(RiskLevel::Low));
        assert_eq!(table.for_label(" High "), table.for_level(RiskLevel::Low));
        assert_eq!(table.for_label("MODERATE"), table.for_level(RiskLevel::Low));
        assert_eq!(
            table.for_label("Critical"),
            table.for_level(RiskLevel::Critical)
        );
    }
}
