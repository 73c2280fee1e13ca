//! Credit card application scoring and rejection advice.
//!
//! [`evaluate`] and [`advise_on_rejection`] are the pure core: both are total functions of one
//! [`ApplicantRecord`] with no retained state. Intake, the service facade and the HTTP router
//! are collaborators layered on top.

pub mod advice;
pub mod domain;
pub(crate) mod evaluation;
pub mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use advice::{advise_on_rejection, advisory_message};
pub use domain::{
    ApplicantRecord, Decision, DecisionStatus, EmploymentStatus, FactorKind, MaritalStatus,
};
pub use evaluation::{DecisionEngine, EvaluationConfig, EvaluationOutcome, ScoreComponent};
pub use intake::{ApplicantForm, IntakeError};
pub use router::credit_card_router;
pub use service::{Assessment, CreditDecisionService};

/// Evaluate an applicant with the default calibration.
pub fn evaluate(applicant: &ApplicantRecord) -> Decision {
    DecisionEngine::default().evaluate(applicant)
}
