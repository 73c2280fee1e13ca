use axum::response::Response;
use serde_json::Value;

use crate::workflows::card_application::domain::{
    ApplicantRecord, EmploymentStatus, MaritalStatus,
};
use crate::workflows::card_application::evaluation::{DecisionEngine, EvaluationConfig};
use crate::workflows::card_application::service::CreditDecisionService;

/// Strong applicant that lands on the approval ceiling.
pub(super) fn prime_applicant() -> ApplicantRecord {
    ApplicantRecord {
        credit_score: 800,
        annual_income: 1_000_000,
        age: 35,
        marital_status: MaritalStatus::Married,
        employment_status: EmploymentStatus::Employed,
        credit_limit_requested: 100_000,
        current_debt: 50_000,
        num_dependents: 1,
    }
}

/// Applicant tripping every negative rule except the student bucket.
pub(super) fn distressed_applicant() -> ApplicantRecord {
    ApplicantRecord {
        credit_score: 600,
        annual_income: 300_000,
        age: 22,
        marital_status: MaritalStatus::Single,
        employment_status: EmploymentStatus::Unemployed,
        credit_limit_requested: 200_000,
        current_debt: 150_000,
        num_dependents: 5,
    }
}

/// Otherwise favorable applicant below the minimum age.
pub(super) fn underage_applicant() -> ApplicantRecord {
    ApplicantRecord {
        credit_score: 700,
        annual_income: 500_000,
        age: 19,
        marital_status: MaritalStatus::Single,
        employment_status: EmploymentStatus::Employed,
        credit_limit_requested: 50_000,
        current_debt: 0,
        num_dependents: 0,
    }
}

/// Middle-of-the-road applicant that fires no advice rule.
///
/// Scores +5 (credit 650-749), 0 (DTI 20-40), 0 (age 26-29), +5 (employed) = 10.
pub(super) fn moderate_applicant() -> ApplicantRecord {
    ApplicantRecord {
        credit_score: 700,
        annual_income: 100_000,
        age: 27,
        marital_status: MaritalStatus::Divorced,
        employment_status: EmploymentStatus::SelfEmployed,
        credit_limit_requested: 20_000,
        current_debt: 30_000,
        num_dependents: 2,
    }
}

pub(super) fn evaluation_engine() -> DecisionEngine {
    DecisionEngine::new(EvaluationConfig::default())
}

pub(super) fn decision_service() -> CreditDecisionService {
    CreditDecisionService::new(EvaluationConfig::default())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
