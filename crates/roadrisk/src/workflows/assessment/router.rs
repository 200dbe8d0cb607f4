use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::domain::ScenarioForm;
use super::service::AssessmentService;

/// Router builder exposing the assessment and model-info endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(assess_handler))
        .route("/api/v1/model", get(model_info_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(form): Json<ScenarioForm>,
) -> Response {
    let outcome = service.assess_form(&form);
    (StatusCode::OK, Json(outcome.view())).into_response()
}

pub(crate) async fn model_info_handler(
    State(service): State<Arc<AssessmentService>>,
) -> Response {
    (StatusCode::OK, Json(service.model_info())).into_response()
}
