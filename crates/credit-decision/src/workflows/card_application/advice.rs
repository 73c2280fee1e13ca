use super::domain::{ApplicantRecord, EmploymentStatus};

pub const LOW_CREDIT_SCORE: &str = "Your CIBIL score is low. Consider improving your credit score.";
pub const HIGH_DEBT_TO_INCOME: &str =
    "Your debt-to-income ratio is high. Try to reduce your current debt.";
pub const EXCESSIVE_LIMIT: &str = "The requested credit limit is too high compared to your income.";
pub const AGE_RISK: &str = "Your age may affect approval. Consider other factors.";
pub const UNEMPLOYED: &str = "Unemployment status negatively impacts approval.";
pub const STUDENT: &str = "Student status may affect approval.";
pub const MANY_DEPENDENTS: &str = "High number of dependents may affect approval.";
pub const GENERIC_REJECTION: &str =
    "Your application was rejected. Please review your details and try again.";

/// Explain a rejection from the raw applicant fields.
///
/// Conditions are checked in a fixed order and each contributes at most one message. The
/// result is never empty: when nothing fires a single generic message is returned.
pub fn advise_on_rejection(applicant: &ApplicantRecord) -> Vec<String> {
    let mut reasons = Vec::new();

    if applicant.credit_score < 650 {
        reasons.push(LOW_CREDIT_SCORE);
    }
    if applicant.debt_to_income().is_some_and(|dti| dti > 40.0) {
        reasons.push(HIGH_DEBT_TO_INCOME);
    }
    if applicant.requests_excessive_limit() {
        reasons.push(EXCESSIVE_LIMIT);
    }
    if applicant.age < 25 || applicant.age > 60 {
        reasons.push(AGE_RISK);
    }
    if applicant.employment_status == EmploymentStatus::Unemployed {
        reasons.push(UNEMPLOYED);
    }
    if applicant.employment_status == EmploymentStatus::Student {
        reasons.push(STUDENT);
    }
    if applicant.num_dependents > 3 {
        reasons.push(MANY_DEPENDENTS);
    }

    if reasons.is_empty() {
        reasons.push(GENERIC_REJECTION);
    }

    reasons.into_iter().map(str::to_string).collect()
}

/// Join advice into the single message shown to the applicant.
pub fn advisory_message(reasons: &[String]) -> String {
    reasons.join(" ")
}
