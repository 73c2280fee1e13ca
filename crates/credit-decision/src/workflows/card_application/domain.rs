use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::intake::{lenient_integer, IntakeError};

/// Applicant provided snapshot evaluated by the decision engine.
///
/// Numeric fields are signed so that any integer the collaborator forwards can be scored
/// without overflow or panics. Range validation (credit score 300-900, age 18-90) happens
/// before the record reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRecord {
    #[serde(default, alias = "cibilScore", deserialize_with = "deserialize_lenient")]
    pub credit_score: i64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub annual_income: i64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub age: i64,
    #[serde(default, deserialize_with = "deserialize_category")]
    pub marital_status: MaritalStatus,
    #[serde(default, deserialize_with = "deserialize_category")]
    pub employment_status: EmploymentStatus,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub credit_limit_requested: i64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub current_debt: i64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub num_dependents: i64,
}

impl ApplicantRecord {
    /// Debt-to-income ratio as a percentage, only defined for a positive income.
    pub fn debt_to_income(&self) -> Option<f64> {
        if self.annual_income > 0 {
            Some(self.current_debt as f64 / self.annual_income as f64 * 100.0)
        } else {
            None
        }
    }

    /// Whether the requested limit exceeds half of a positive annual income.
    pub fn requests_excessive_limit(&self) -> bool {
        self.annual_income > 0
            && self.credit_limit_requested as f64 > self.annual_income as f64 * 0.5
    }
}

/// Marital status as collected on the application form. Carried for completeness; no scoring
/// or advice rule reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 4] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::Divorced,
        MaritalStatus::Widowed,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MaritalStatus {
    type Err = IntakeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = category_key(raw);
        MaritalStatus::ALL
            .into_iter()
            .find(|status| category_key(status.label()) == key)
            .ok_or_else(|| IntakeError::UnknownMaritalStatus(raw.trim().to_string()))
    }
}

impl TryFrom<String> for MaritalStatus {
    type Error = IntakeError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

/// Employment category driving the employment scoring bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum EmploymentStatus {
    #[default]
    Employed,
    #[serde(rename = "Self-Employed")]
    SelfEmployed,
    Student,
    Unemployed,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 4] = [
        EmploymentStatus::Employed,
        EmploymentStatus::SelfEmployed,
        EmploymentStatus::Student,
        EmploymentStatus::Unemployed,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "Employed",
            EmploymentStatus::SelfEmployed => "Self-Employed",
            EmploymentStatus::Student => "Student",
            EmploymentStatus::Unemployed => "Unemployed",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmploymentStatus {
    type Err = IntakeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = category_key(raw);
        EmploymentStatus::ALL
            .into_iter()
            .find(|status| category_key(status.label()) == key)
            .ok_or_else(|| IntakeError::UnknownEmploymentStatus(raw.trim().to_string()))
    }
}

impl TryFrom<String> for EmploymentStatus {
    type Error = IntakeError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

/// Normalizes `Self-Employed`, `self_employed` and `SELF EMPLOYED` to one comparison key.
fn category_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Factors contributing to the application score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    CreditScore,
    DebtToIncome,
    RequestedLimit,
    Age,
    Employment,
    Dependents,
}

impl FactorKind {
    pub const fn label(self) -> &'static str {
        match self {
            FactorKind::CreditScore => "credit_score",
            FactorKind::DebtToIncome => "debt_to_income",
            FactorKind::RequestedLimit => "requested_limit",
            FactorKind::Age => "age",
            FactorKind::Employment => "employment",
            FactorKind::Dependents => "dependents",
        }
    }
}

/// Binary adjudication for a credit card application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionStatus {
    Approved,
    Rejected,
}

impl DecisionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DecisionStatus::Approved => "APPROVED",
            DecisionStatus::Rejected => "REJECTED",
        }
    }
}

/// Status plus the probability attached to that status, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub status: DecisionStatus,
    pub confidence: f64,
}

impl Decision {
    pub fn is_rejected(&self) -> bool {
        self.status == DecisionStatus::Rejected
    }

    pub fn summary(&self) -> String {
        match self.status {
            DecisionStatus::Approved => {
                format!("application approved ({:.1}% confidence)", self.confidence)
            }
            DecisionStatus::Rejected => {
                format!("application rejected ({:.1}% confidence)", self.confidence)
            }
        }
    }
}

fn deserialize_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|_| i64::MAX))
            .or_else(|| number.as_f64().map(|float| float.trunc() as i64))
            .unwrap_or(0),
        Some(serde_json::Value::String(raw)) => lenient_integer(&raw),
        _ => 0,
    })
}

/// Null or blank categories fall back to the form default; anything else must name a variant.
fn deserialize_category<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + FromStr<Err = IntakeError>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw.parse().map_err(serde::de::Error::custom),
        _ => Ok(T::default()),
    }
}
