use crate::cli::ServeArgs;
use crate::infra::{load_model, AppState};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use roadrisk::config::AppConfig;
use roadrisk::error::AppError;
use roadrisk::telemetry;
use roadrisk::workflows::assessment::AssessmentService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.training_data.take() {
        config.training.dataset_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // Model training is the only expensive startup step; a bad dataset must
    // abort here rather than leave the service answering with no classifier.
    let model = load_model(config.training.dataset_path.as_deref())?;
    let model_info = model.info();
    let service = Arc::new(AssessmentService::new(Arc::new(model)));

    let app = with_assessment_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        records = model_info.record_count,
        schema = model_info.schema_version,
        "severity assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
