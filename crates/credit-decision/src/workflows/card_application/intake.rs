use serde::{Deserialize, Serialize};

use super::domain::{ApplicantRecord, EmploymentStatus, MaritalStatus};

/// Errors raised while turning raw form input into an [`ApplicantRecord`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("unknown marital status '{0}' (expected Single, Married, Divorced or Widowed)")]
    UnknownMaritalStatus(String),
    #[error(
        "unknown employment status '{0}' (expected Employed, Self-Employed, Student or Unemployed)"
    )]
    UnknownEmploymentStatus(String),
}

/// Raw, text-valued application form as collected by a browser or the CLI.
///
/// Every field is optional; missing text behaves like an empty input box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantForm {
    #[serde(default, alias = "cibilScore")]
    pub credit_score: Option<String>,
    #[serde(default)]
    pub annual_income: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub employment_status: Option<String>,
    #[serde(default)]
    pub credit_limit_requested: Option<String>,
    #[serde(default)]
    pub current_debt: Option<String>,
    #[serde(default)]
    pub num_dependents: Option<String>,
}

impl ApplicantForm {
    /// Coerce the form into a record.
    ///
    /// Numeric text never fails: unparsable or missing values become 0. Categorical text must
    /// name a known option; a blank selection falls back to the form default.
    pub fn into_record(self) -> Result<ApplicantRecord, IntakeError> {
        let marital_status = match non_blank(self.marital_status.as_deref()) {
            Some(raw) => raw.parse()?,
            None => MaritalStatus::default(),
        };
        let employment_status = match non_blank(self.employment_status.as_deref()) {
            Some(raw) => raw.parse()?,
            None => EmploymentStatus::default(),
        };

        Ok(ApplicantRecord {
            credit_score: coerce(self.credit_score.as_deref()),
            annual_income: coerce(self.annual_income.as_deref()),
            age: coerce(self.age.as_deref()),
            marital_status,
            employment_status,
            credit_limit_requested: coerce(self.credit_limit_requested.as_deref()),
            current_debt: coerce(self.current_debt.as_deref()),
            num_dependents: coerce(self.num_dependents.as_deref()),
        })
    }
}

impl TryFrom<ApplicantForm> for ApplicantRecord {
    type Error = IntakeError;

    fn try_from(form: ApplicantForm) -> Result<Self, Self::Error> {
        form.into_record()
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn coerce(raw: Option<&str>) -> i64 {
    raw.map(lenient_integer).unwrap_or(0)
}

/// Parse the leading integer of `raw`, ignoring surrounding whitespace and trailing text.
///
/// `"42"`, `" 42 "`, `"42.9"` and `"42abc"` all yield 42; text without leading digits yields 0.
/// Values beyond the `i64` range saturate.
pub fn lenient_integer(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    if seen_digit {
        value
    } else {
        0
    }
}
