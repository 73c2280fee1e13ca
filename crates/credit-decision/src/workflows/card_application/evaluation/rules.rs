use super::super::domain::{ApplicantRecord, EmploymentStatus, FactorKind};
use super::ScoreComponent;

/// Apply every additive rule to the applicant, returning the fired components and their sum.
///
/// Rules read only the raw applicant fields and are evaluated independently of each other;
/// buckets within one factor are mutually exclusive.
pub(crate) fn score_applicant(applicant: &ApplicantRecord) -> (Vec<ScoreComponent>, i32) {
    let mut components = Vec::new();

    let credit_score = applicant.credit_score;
    if credit_score >= 750 {
        components.push(ScoreComponent {
            factor: FactorKind::CreditScore,
            score: 10,
            notes: format!("credit score {credit_score} is excellent (750+)"),
        });
    } else if credit_score >= 650 {
        components.push(ScoreComponent {
            factor: FactorKind::CreditScore,
            score: 5,
            notes: format!("credit score {credit_score} is fair (650-749)"),
        });
    } else {
        components.push(ScoreComponent {
            factor: FactorKind::CreditScore,
            score: -10,
            notes: format!("credit score {credit_score} below 650"),
        });
    }

    match applicant.debt_to_income() {
        Some(dti) if dti > 40.0 => components.push(ScoreComponent {
            factor: FactorKind::DebtToIncome,
            score: -5,
            notes: format!("debt-to-income ratio {dti:.1}% exceeds 40%"),
        }),
        Some(dti) if dti < 20.0 => components.push(ScoreComponent {
            factor: FactorKind::DebtToIncome,
            score: 5,
            notes: format!("debt-to-income ratio {dti:.1}% under 20%"),
        }),
        Some(_) => {}
        None if applicant.current_debt > 0 => components.push(ScoreComponent {
            factor: FactorKind::DebtToIncome,
            score: -10,
            notes: format!("debt of {} with no declared income", applicant.current_debt),
        }),
        None => {}
    }

    if applicant.requests_excessive_limit() {
        components.push(ScoreComponent {
            factor: FactorKind::RequestedLimit,
            score: -5,
            notes: format!(
                "requested limit {} exceeds half of income {}",
                applicant.credit_limit_requested, applicant.annual_income
            ),
        });
    }

    let age = applicant.age;
    if age < 25 || age > 60 {
        components.push(ScoreComponent {
            factor: FactorKind::Age,
            score: -2,
            notes: format!("age {age} outside 25-60"),
        });
    } else if (30..=50).contains(&age) {
        components.push(ScoreComponent {
            factor: FactorKind::Age,
            score: 2,
            notes: format!("age {age} within prime earning years"),
        });
    }

    let employment = applicant.employment_status;
    let (employment_score, employment_note) = match employment {
        EmploymentStatus::Unemployed => (-10, "unemployed applicant"),
        EmploymentStatus::Student => (-5, "student applicant"),
        EmploymentStatus::Employed | EmploymentStatus::SelfEmployed => {
            (5, "applicant has employment income")
        }
    };
    components.push(ScoreComponent {
        factor: FactorKind::Employment,
        score: employment_score,
        notes: format!("{employment_note} ({employment})"),
    });

    if applicant.num_dependents > 3 {
        components.push(ScoreComponent {
            factor: FactorKind::Dependents,
            score: -2,
            notes: format!("{} dependents exceeds 3", applicant.num_dependents),
        });
    }

    let total_score = components.iter().map(|component| component.score).sum();
    (components, total_score)
}
