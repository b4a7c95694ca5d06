use std::collections::BTreeMap;

use crate::models::{AssessmentStatistics, RiskAssessment, RiskLevel, TierSummary};

/// Aggregates stored assessments by tier.
pub struct StatisticsService;

impl StatisticsService {
    /// Count and average score per tier, ordered Low to Critical. Tiers with
    /// no assessments are omitted.
    pub fn summarize(assessments: &[RiskAssessment]) -> AssessmentStatistics {
        let mut groups: BTreeMap<RiskLevel, (usize, u64)> = BTreeMap::new();
        for assessment in assessments {
            let entry = groups.entry(assessment.risk_level).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += u64::from(assessment.risk_score);
        }

        let by_risk_level = groups
            .into_iter()
            .map(|(risk_level, (count, total))| TierSummary {
                risk_level,
                count,
                average_score: total as f64 / count as f64,
            })
            .collect();

        AssessmentStatistics {
            total_assessments: assessments.len(),
            by_risk_level,
        }
    }
}
