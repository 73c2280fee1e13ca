use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use super::advice::advisory_message;
use super::domain::ApplicantRecord;
use super::service::{Assessment, CreditDecisionService};

/// Router builder exposing HTTP endpoints for evaluation and advice.
pub fn credit_card_router(service: Arc<CreditDecisionService>) -> Router {
    Router::new()
        .route("/api/v1/credit-card/evaluations", post(evaluate_handler))
        .route("/api/v1/credit-card/advice", post(advice_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EvaluationParams {
    #[serde(default)]
    pub(crate) include_advice: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluationResponse {
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) results: Vec<Assessment>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AdviceResponse {
    pub(crate) reasons: Vec<String>,
    pub(crate) message: String,
}

/// Accepts either one applicant object or an array of them.
pub(crate) async fn evaluate_handler(
    State(service): State<Arc<CreditDecisionService>>,
    params: Result<Query<EvaluationParams>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    let applicants = match applicants_from_payload(payload) {
        Ok(applicants) => applicants,
        Err(err) => return unprocessable(err.to_string()),
    };

    let results: Vec<Assessment> = applicants
        .iter()
        .map(|applicant| service.assess(applicant, params.include_advice))
        .collect();

    let delay = service.response_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    info!(
        applicants = results.len(),
        include_advice = params.include_advice,
        "credit card evaluations served"
    );

    let body = EvaluationResponse {
        evaluated_at: Utc::now(),
        results,
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn advice_handler(
    State(service): State<Arc<CreditDecisionService>>,
    payload: Result<Json<ApplicantRecord>, JsonRejection>,
) -> Response {
    let Json(applicant) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    let reasons = service.advise(&applicant);
    let message = advisory_message(&reasons);
    (StatusCode::OK, Json(AdviceResponse { reasons, message })).into_response()
}

fn applicants_from_payload(payload: Value) -> Result<Vec<ApplicantRecord>, serde_json::Error> {
    match payload {
        Value::Array(_) => serde_json::from_value(payload),
        single => serde_json::from_value(single).map(|applicant| vec![applicant]),
    }
}

fn unprocessable(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
