use crate::config::{ScoringConfig, Settings};
use crate::config::settings::NoiseMode;
use crate::error::{ValidationError, ValidationResult};

const WEIGHT_TOLERANCE: f64 = 1e-6;
const RECOMMENDATIONS_PER_TIER: usize = 6;

/// Reject settings the scoring pipeline cannot honour.
pub fn validate_settings(settings: &Settings) -> ValidationResult<()> {
    validate_scoring(&settings.scoring)?;

    if settings.noise.mode == NoiseMode::Seeded && settings.noise.seed.is_none() {
        return Err(invalid("noise.seed", "seeded noise mode requires a seed"));
    }

    match settings.logging.format.as_str() {
        "json" | "pretty" | "compact" => Ok(()),
        other => Err(invalid(
            "logging.format",
            &format!("expected json, pretty or compact, got {}", other),
        )),
    }
}

pub fn validate_scoring(config: &ScoringConfig) -> ValidationResult<()> {
    let total = config.weights.total();
    if (total - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(invalid(
            "weights",
            &format!("aggregation weights must sum to 1, got {}", total),
        ));
    }

    let mix = config.vulnerability.climate + config.vulnerability.economic;
    if (mix - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(invalid(
            "vulnerability",
            &format!("vulnerability mix must sum to 1, got {}", mix),
        ));
    }

    let tiers = &config.tiers;
    ascending("tiers", &[tiers.moderate, tiers.high, tiers.critical])?;

    let severity = &config.severity;
    ascending(
        "severity",
        &[
            severity.low,
            severity.moderate,
            severity.high,
            severity.critical,
            severity.extreme,
        ],
    )?;

    if config.population.divisor <= 0.0 {
        return Err(invalid("population.divisor", "must be positive"));
    }
    if config.economic.noise_span < 0.0 {
        return Err(invalid("economic.noise_span", "must not be negative"));
    }
    if config.trend.window == 0 {
        return Err(invalid("trend.window", "must be at least 1"));
    }

    let lists = &config.recommendations;
    for (name, list) in [
        ("recommendations.low", &lists.low),
        ("recommendations.moderate", &lists.moderate),
        ("recommendations.high", &lists.high),
        ("recommendations.critical", &lists.critical),
    ] {
        if list.len() != RECOMMENDATIONS_PER_TIER {
            return Err(invalid(
                name,
                &format!(
                    "expected {} entries, got {}",
                    RECOMMENDATIONS_PER_TIER,
                    list.len()
                ),
            ));
        }
        if list.iter().any(|item| item.trim().is_empty()) {
            return Err(invalid(name, "entries must not be empty"));
        }
    }

    Ok(())
}

fn ascending(field: &str, values: &[f64]) -> ValidationResult<()> {
    if values.windows(2).all(|pair| pair[0] < pair[1]) {
        Ok(())
    } else {
        Err(invalid(field, "thresholds must be strictly ascending"))
    }
}

fn invalid(field: &str, message: &str) -> ValidationError {
    ValidationError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}
