use super::super::domain::{Decision, DecisionStatus};
use super::config::EvaluationConfig;

/// Linear map of the accumulator onto 0-100, clamped to the configured bounds.
pub(crate) fn approval_probability(total_score: i32, config: &EvaluationConfig) -> f64 {
    let span = f64::from(config.max_score) - f64::from(config.min_score);
    let raw = (f64::from(total_score) - f64::from(config.min_score)) / span * 100.0;
    raw.clamp(config.probability_floor, config.probability_ceiling)
}

pub(crate) fn decide_outcome(approval_probability: f64, config: &EvaluationConfig) -> Decision {
    if approval_probability >= config.approval_threshold {
        Decision {
            status: DecisionStatus::Approved,
            confidence: round_to_tenth(approval_probability),
        }
    } else {
        Decision {
            status: DecisionStatus::Rejected,
            confidence: round_to_tenth(100.0 - approval_probability),
        }
    }
}

/// Decision issued when the applicant is below the minimum age.
pub(crate) fn age_cutoff(config: &EvaluationConfig) -> Decision {
    Decision {
        status: DecisionStatus::Rejected,
        confidence: round_to_tenth(100.0 - config.probability_floor),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
