use metrics_exporter_prometheus::PrometheusHandle;
use roadrisk::error::AppError;
use roadrisk::workflows::assessment::SeverityModel;
use roadrisk::workflows::history::AccidentHistoryImporter;
use std::io::Cursor;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Labelled accident history shipped with the binary so the service and demo
/// can run without an external dataset.
pub(crate) const SAMPLE_DATASET: &str = include_str!("../data/sample_accidents.csv");

/// Trains the severity model from the given CSV path, or from the bundled
/// sample when no path is supplied. Any import or training failure here is
/// fatal: without a model the service must not come up.
pub(crate) fn load_model(dataset_path: Option<&Path>) -> Result<SeverityModel, AppError> {
    let records = match dataset_path {
        Some(path) => AccidentHistoryImporter::from_path(path)?,
        None => AccidentHistoryImporter::from_reader(Cursor::new(SAMPLE_DATASET))?,
    };
    let model = SeverityModel::train(&records)?;
    Ok(model)
}
