//! HTTP routes: a thin wrapper over the pure scorer.

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use tenbin_core::{ScoreRequest, ScoreResponse};
use tracing::debug;

use crate::error::ApiError;

/// Build the application router.
///
/// スコアラーは無状態なので `Router` に共有 state はありません。
pub fn router() -> Router {
    Router::new()
        .route(
            "/api/compute",
            post(compute).fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .fallback(not_found)
}

/// POST /api/compute
async fn compute(
    body: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let request = match body {
        Ok(Json(request)) => request,
        // No JSON content type: same as submitting `{}`.
        Err(JsonRejection::MissingJsonContentType(_)) => ScoreRequest::default(),
        Err(rejection) => return Err(ApiError::BadRequest(rejection.body_text())),
    };

    let (pros, cons) = (request.pros.len(), request.cons.len());
    let response = request.evaluate();
    debug!(
        pros,
        cons,
        diff = response.totals.diff,
        needs_verification = response.decision_gate.needs_verification,
        "scored decision"
    );
    Ok(Json(response))
}

/// Liveness probe.
async fn health() -> &'static str {
    "OK"
}

/// Non-POST methods on /api/compute.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
