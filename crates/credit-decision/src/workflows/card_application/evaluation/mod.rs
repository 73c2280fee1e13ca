mod config;
mod policy;
mod rules;

pub use config::EvaluationConfig;

use super::domain::{ApplicantRecord, Decision, FactorKind};
use policy::{age_cutoff, approval_probability, decide_outcome};
use serde::{Deserialize, Serialize};

/// Stateless evaluator that applies the calibration to an applicant record.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    config: EvaluationConfig,
}

impl DecisionEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Score the applicant and keep the per-factor trail.
    pub fn score(&self, applicant: &ApplicantRecord) -> EvaluationOutcome {
        if applicant.age < self.config.minimum_age {
            return EvaluationOutcome {
                decision: age_cutoff(&self.config),
                total_score: 0,
                approval_probability: self.config.probability_floor,
                age_cutoff: true,
                components: Vec::new(),
            };
        }

        let (components, total_score) = rules::score_applicant(applicant);
        let approval_probability = approval_probability(total_score, &self.config);
        let decision = decide_outcome(approval_probability, &self.config);

        EvaluationOutcome {
            decision,
            total_score,
            approval_probability,
            age_cutoff: false,
            components,
        }
    }

    pub fn evaluate(&self, applicant: &ApplicantRecord) -> Decision {
        self.score(applicant).decision
    }
}

/// Discrete contribution to an evaluation, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: FactorKind,
    pub score: i32,
    pub notes: String,
}

/// Evaluation output describing the accumulator, probability, and decision trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub decision: Decision,
    pub total_score: i32,
    pub approval_probability: f64,
    /// Set when the minimum-age rule short-circuited scoring.
    pub age_cutoff: bool,
    pub components: Vec<ScoreComponent>,
}

impl EvaluationOutcome {
    pub fn negative_components(&self) -> impl Iterator<Item = &ScoreComponent> {
        self.components
            .iter()
            .filter(|component| component.score < 0)
    }
}
