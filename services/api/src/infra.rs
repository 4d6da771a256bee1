use metrics_exporter_prometheus::PrometheusHandle;
use pattern_scoring::assessments::{AssessmentService, JsonFileResultStore};
use pattern_scoring::config::AppConfig;
use pattern_scoring::error::AppError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service backed by the on-disk store under the configured data directory.
pub(crate) fn file_backed_service(
    config: &AppConfig,
) -> Result<AssessmentService<JsonFileResultStore>, AppError> {
    let store = JsonFileResultStore::new(&config.storage.data_dir, config.storage.history_limit)?;
    Ok(AssessmentService::new(
        Arc::new(store),
        config.scoring.default_algorithm,
    ))
}
