use chrono::NaiveDate;
use lien_assist::config::AppConfig;
use lien_assist::error::AppError;
use lien_assist::workflows::lien::LienEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the engine from operator configuration. Invalid rules are fatal.
pub(crate) fn engine_from_config(config: &AppConfig) -> Result<LienEngine, AppError> {
    Ok(LienEngine::new(config.engine.rules())?)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
