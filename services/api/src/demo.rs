use crate::infra::default_evaluation_config;
use clap::Args;
use credit_decision::error::AppError;
use credit_decision::workflows::card_application::{
    ApplicantForm, ApplicantRecord, Assessment, CreditDecisionService, EmploymentStatus,
    MaritalStatus,
};

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// CIBIL/credit score (300-900)
    #[arg(long, alias = "cibil-score")]
    pub(crate) credit_score: Option<String>,
    /// Annual income in currency units
    #[arg(long)]
    pub(crate) annual_income: Option<String>,
    /// Applicant age (18-90)
    #[arg(long)]
    pub(crate) age: Option<String>,
    /// Single, Married, Divorced or Widowed
    #[arg(long)]
    pub(crate) marital_status: Option<String>,
    /// Employed, Self-Employed, Student or Unemployed
    #[arg(long)]
    pub(crate) employment_status: Option<String>,
    /// Requested credit limit
    #[arg(long)]
    pub(crate) credit_limit_requested: Option<String>,
    /// Outstanding debt
    #[arg(long)]
    pub(crate) current_debt: Option<String>,
    /// Number of dependents
    #[arg(long)]
    pub(crate) num_dependents: Option<String>,
    /// Explain the decision when the application is rejected
    #[arg(long)]
    pub(crate) advice: bool,
    /// Print the assessment as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl EvaluateArgs {
    fn into_form(self) -> ApplicantForm {
        ApplicantForm {
            credit_score: self.credit_score,
            annual_income: self.annual_income,
            age: self.age,
            marital_status: self.marital_status,
            employment_status: self.employment_status,
            credit_limit_requested: self.credit_limit_requested,
            current_debt: self.current_debt,
            num_dependents: self.num_dependents,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip rejection advice in the demo output.
    #[arg(long)]
    pub(crate) skip_advice: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let include_advice = args.advice;
    let as_json = args.json;
    let service = CreditDecisionService::new(default_evaluation_config());

    let assessment = service.assess_form(args.into_form(), include_advice)?;

    if as_json {
        let rendered = serde_json::to_string_pretty(&assessment)
            .map_err(|err| AppError::Io(err.into()))?;
        println!("{rendered}");
    } else {
        render_assessment("Application", &assessment);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = CreditDecisionService::new(default_evaluation_config());

    println!("Credit card decision demo");
    for (label, applicant) in demo_applicants() {
        let assessment = service.assess(&applicant, !args.skip_advice);
        println!();
        render_assessment(label, &assessment);
    }

    Ok(())
}

fn demo_applicants() -> Vec<(&'static str, ApplicantRecord)> {
    vec![
        (
            "Established salaried applicant",
            ApplicantRecord {
                credit_score: 800,
                annual_income: 1_000_000,
                age: 35,
                marital_status: MaritalStatus::Married,
                employment_status: EmploymentStatus::Employed,
                credit_limit_requested: 100_000,
                current_debt: 50_000,
                num_dependents: 1,
            },
        ),
        (
            "Over-leveraged unemployed applicant",
            ApplicantRecord {
                credit_score: 600,
                annual_income: 300_000,
                age: 22,
                marital_status: MaritalStatus::Single,
                employment_status: EmploymentStatus::Unemployed,
                credit_limit_requested: 200_000,
                current_debt: 150_000,
                num_dependents: 5,
            },
        ),
        (
            "Applicant under the minimum age",
            ApplicantRecord {
                credit_score: 700,
                annual_income: 500_000,
                age: 19,
                marital_status: MaritalStatus::Single,
                employment_status: EmploymentStatus::Employed,
                credit_limit_requested: 50_000,
                current_debt: 0,
                num_dependents: 0,
            },
        ),
        (
            "Student with a modest request",
            ApplicantRecord {
                credit_score: 680,
                annual_income: 120_000,
                age: 23,
                marital_status: MaritalStatus::Single,
                employment_status: EmploymentStatus::Student,
                credit_limit_requested: 40_000,
                current_debt: 30_000,
                num_dependents: 0,
            },
        ),
    ]
}

fn render_assessment(label: &str, assessment: &Assessment) {
    println!(
        "{label}: {} ({:.1}% confidence)",
        assessment.status.label(),
        assessment.confidence
    );

    if assessment.age_cutoff {
        println!("- below minimum age, scoring skipped");
    } else {
        println!(
            "- application score {} (approval probability {:.1}%)",
            assessment.total_score, assessment.approval_probability
        );
        for component in &assessment.components {
            println!(
                "  {:+} {}: {}",
                component.score,
                component.factor.label(),
                component.notes
            );
        }
    }

    if let Some(message) = &assessment.advisory_message {
        println!("Advice: {message}");
    }
}
