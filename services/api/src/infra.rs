use credit_decision::config::PresentationConfig;
use credit_decision::workflows::card_application::{CreditDecisionService, EvaluationConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn default_evaluation_config() -> EvaluationConfig {
    EvaluationConfig::default()
}

/// Service wired with the calibration and the configured presentation delay.
pub(crate) fn decision_service(presentation: &PresentationConfig) -> CreditDecisionService {
    CreditDecisionService::new(default_evaluation_config())
        .with_response_delay(presentation.decision_delay)
}
