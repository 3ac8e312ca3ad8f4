use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::RawAnswers;
use super::engine::LienEngine;
use super::intake::IntakeMode;

pub const ASSESSMENT_PATH: &str = "/api/v1/lien/assessment";

/// Questionnaire submission as posted by the results view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentRequest {
    pub answers: RawAnswers,
    /// Evaluation date; the server's local date when omitted.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub draft: bool,
}

/// Router exposing the deadline engine over HTTP.
pub fn lien_router(engine: Arc<LienEngine>) -> Router {
    Router::new()
        .route(ASSESSMENT_PATH, post(assessment_handler))
        .with_state(engine)
}

pub(crate) async fn assessment_handler(
    State(engine): State<Arc<LienEngine>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response {
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    let mode = if request.draft {
        IntakeMode::Draft
    } else {
        IntakeMode::Submitted
    };

    match engine.evaluate_with_mode(&request.answers, today, mode) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
                "issues": error.issues,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
