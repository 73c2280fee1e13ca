use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log level/filter '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = select_filter(rust_log.as_deref(), &config.log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// A parseable `RUST_LOG` overrides the configured level; an unparseable one is ignored.
fn select_filter(rust_log: Option<&str>, log_level: &str) -> Result<EnvFilter, TelemetryError> {
    match rust_log.map(EnvFilter::try_new) {
        Some(Ok(filter)) => Ok(filter),
        _ => EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
            value: log_level.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_overrides_configured_level() {
        let filter = select_filter(Some("credit_decision=trace"), "warn").expect("filter");
        assert_eq!(filter.to_string(), "credit_decision=trace");
    }

    #[test]
    fn configured_level_applies_without_rust_log() {
        let filter = select_filter(None, "debug").expect("filter");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn unparseable_rust_log_falls_back_to_configured_level() {
        let filter = select_filter(Some("credit_decision=loud"), "info").expect("filter");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn invalid_configured_level_is_reported() {
        match select_filter(None, "credit_decision=loud") {
            Err(TelemetryError::EnvFilter { value, .. }) => {
                assert_eq!(value, "credit_decision=loud")
            }
            other => panic!("expected filter error, got {other:?}"),
        }
    }
}
