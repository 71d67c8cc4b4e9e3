use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::payments::{CheckoutPlan, PaymentGateway};
use crate::report::DocumentRenderer;
use crate::service::{ReportSubmission, ScoreService, ScoreServiceError, ScoreSubmission};
use crate::session::SessionDirectory;

/// Router builder exposing the scoring, report, and checkout endpoints.
pub fn score_router<S, P, R>(service: Arc<ScoreService<S, P, R>>) -> Router
where
    S: SessionDirectory + 'static,
    P: PaymentGateway + 'static,
    R: DocumentRenderer + 'static,
{
    Router::new()
        .route("/api/v1/score", post(score_handler::<S, P, R>))
        .route("/api/v1/report", post(report_handler::<S, P, R>))
        .route(
            "/api/v1/premium/checkout",
            post(checkout_handler::<S, P, R>),
        )
        .with_state(service)
}

pub(crate) async fn score_handler<S, P, R>(
    State(service): State<Arc<ScoreService<S, P, R>>>,
    Json(submission): Json<ScoreSubmission>,
) -> Response
where
    S: SessionDirectory + 'static,
    P: PaymentGateway + 'static,
    R: DocumentRenderer + 'static,
{
    match service.score(submission) {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<S, P, R>(
    State(service): State<Arc<ScoreService<S, P, R>>>,
    Json(submission): Json<ReportSubmission>,
) -> Response
where
    S: SessionDirectory + 'static,
    P: PaymentGateway + 'static,
    R: DocumentRenderer + 'static,
{
    match service.report(submission, Utc::now()) {
        Ok(report) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"ecom-health-report.txt\"",
                ),
            ],
            report.artifact,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutRequest {
    pub(crate) plan: CheckoutPlan,
}

pub(crate) async fn checkout_handler<S, P, R>(
    State(service): State<Arc<ScoreService<S, P, R>>>,
    Json(request): Json<CheckoutRequest>,
) -> Response
where
    S: SessionDirectory + 'static,
    P: PaymentGateway + 'static,
    R: DocumentRenderer + 'static,
{
    match service.checkout(request.plan) {
        Ok(intent) => (StatusCode::OK, Json(intent)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ScoreServiceError) -> Response {
    let status = match &error {
        ScoreServiceError::Consent(_)
        | ScoreServiceError::Kpi(_)
        | ScoreServiceError::Handle(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ScoreServiceError::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ScoreServiceError::Render(_) | ScoreServiceError::Payment(_) => StatusCode::BAD_GATEWAY,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
