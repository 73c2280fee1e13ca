use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use super::advice::{advise_on_rejection, advisory_message};
use super::domain::{ApplicantRecord, Decision, DecisionStatus};
use super::evaluation::{DecisionEngine, EvaluationConfig, EvaluationOutcome, ScoreComponent};
use super::intake::{ApplicantForm, IntakeError};

/// Service composing the decision engine and the rejection advisor for callers such as the
/// HTTP router and the CLI.
#[derive(Debug, Clone, Default)]
pub struct CreditDecisionService {
    engine: DecisionEngine,
    response_delay: Duration,
}

impl CreditDecisionService {
    pub fn new(config: EvaluationConfig) -> Self {
        Self {
            engine: DecisionEngine::new(config),
            response_delay: Duration::ZERO,
        }
    }

    /// Presentation delay applied by asynchronous callers before they hand out a decision.
    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }

    pub fn response_delay(&self) -> Duration {
        self.response_delay
    }

    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Evaluate one applicant, attaching advice only when it was rejected and advice was asked
    /// for.
    pub fn assess(&self, applicant: &ApplicantRecord, include_advice: bool) -> Assessment {
        let outcome = self.engine.score(applicant);
        let advice = if include_advice && outcome.decision.is_rejected() {
            Some(advise_on_rejection(applicant))
        } else {
            None
        };

        debug!(
            status = outcome.decision.status.label(),
            confidence = outcome.decision.confidence,
            total_score = outcome.total_score,
            age_cutoff = outcome.age_cutoff,
            "credit card application evaluated"
        );

        Assessment::from_outcome(outcome, advice)
    }

    /// Run raw form input through intake before assessing it.
    pub fn assess_form(
        &self,
        form: ApplicantForm,
        include_advice: bool,
    ) -> Result<Assessment, IntakeError> {
        let applicant = form.into_record()?;
        Ok(self.assess(&applicant, include_advice))
    }

    pub fn advise(&self, applicant: &ApplicantRecord) -> Vec<String> {
        advise_on_rejection(applicant)
    }
}

/// Decision, audit trail and optional advice for one applicant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub status: DecisionStatus,
    pub confidence: f64,
    pub approval_probability: f64,
    pub total_score: i32,
    pub age_cutoff: bool,
    pub components: Vec<ScoreComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory_message: Option<String>,
}

impl Assessment {
    fn from_outcome(outcome: EvaluationOutcome, advice: Option<Vec<String>>) -> Self {
        let advisory_message = advice.as_deref().map(advisory_message);
        Self {
            status: outcome.decision.status,
            confidence: outcome.decision.confidence,
            approval_probability: outcome.approval_probability,
            total_score: outcome.total_score,
            age_cutoff: outcome.age_cutoff,
            components: outcome.components,
            advice,
            advisory_message,
        }
    }

    pub fn decision(&self) -> Decision {
        Decision {
            status: self.status,
            confidence: self.confidence,
        }
    }
}
