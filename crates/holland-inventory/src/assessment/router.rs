use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::LedgerError;
use super::service::{AssessmentService, AssessmentServiceError, ProfileSubmission, SessionId};
use super::submission::ResultSubmitter;

/// Router builder exposing the assessment session endpoints.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: ResultSubmitter + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(start_handler::<S>))
        .route("/api/v1/assessments/:session_id", get(view_handler::<S>))
        .route(
            "/api/v1/assessments/:session_id/advance",
            post(advance_handler::<S>),
        )
        .route(
            "/api/v1/assessments/:session_id/answers",
            post(answer_handler::<S>),
        )
        .route(
            "/api/v1/assessments/:session_id/back",
            post(back_handler::<S>),
        )
        .route(
            "/api/v1/assessments/:session_id/score",
            post(score_handler::<S>),
        )
        .route(
            "/api/v1/assessments/:session_id/submit",
            post(submit_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub(crate) item: usize,
    pub(crate) value: u8,
}

pub(crate) async fn start_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Json(submission): Json<ProfileSubmission>,
) -> Response
where
    S: ResultSubmitter + 'static,
{
    match service.start(submission) {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn view_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: ResultSubmitter + 'static,
{
    let id = SessionId(session_id);
    match service.view(&id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn advance_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: ResultSubmitter + 'static,
{
    let id = SessionId(session_id);
    match service.advance(&id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answer_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
    Json(request): Json<AnswerRequest>,
) -> Response
where
    S: ResultSubmitter + 'static,
{
    let id = SessionId(session_id);
    match service.answer(&id, request.item, request.value) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn back_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: ResultSubmitter + 'static,
{
    let id = SessionId(session_id);
    match service.back(&id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: ResultSubmitter + 'static,
{
    let id = SessionId(session_id);
    match service.score(&id) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: ResultSubmitter + 'static,
{
    let id = SessionId(session_id);
    match service.submit(&id) {
        Ok(payload) => (StatusCode::ACCEPTED, Json(payload)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::SessionNotFound => StatusCode::NOT_FOUND,
        AssessmentServiceError::Ledger(
            LedgerError::DuplicateSelfRating(_)
            | LedgerError::ValueOutOfRange { .. }
            | LedgerError::IncompleteProfile,
        ) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Ledger(_) | AssessmentServiceError::NotScored => {
            StatusCode::BAD_REQUEST
        }
        AssessmentServiceError::Submission(_) => StatusCode::BAD_GATEWAY,
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
