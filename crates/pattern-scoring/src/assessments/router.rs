use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::service::{AssessmentReceipt, AssessmentRequest, AssessmentService};
use super::store::{RespondentProfile, ResultId, ResultRepository, StoredResult};
use crate::error::AppError;

/// Router builder exposing HTTP endpoints for scoring and result lookup.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: ResultRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments/learning-style",
            post(learning_style_handler::<R>),
        )
        .route(
            "/api/v1/assessments/cognitive",
            post(cognitive_handler::<R>),
        )
        .route("/api/v1/results/:result_id", get(result_handler::<R>))
        .route("/api/v1/profiles/:user_id", get(profile_handler::<R>))
        .with_state(service)
}

pub(crate) async fn learning_style_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Json(request): Json<AssessmentRequest>,
) -> Result<(StatusCode, Json<AssessmentReceipt>), AppError>
where
    R: ResultRepository + 'static,
{
    let receipt = service.submit_learning_style(request)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

pub(crate) async fn cognitive_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Json(request): Json<AssessmentRequest>,
) -> Result<(StatusCode, Json<AssessmentReceipt>), AppError>
where
    R: ResultRepository + 'static,
{
    let receipt = service.submit_cognitive(request)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

pub(crate) async fn result_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(result_id): Path<String>,
) -> Result<Json<StoredResult>, AppError>
where
    R: ResultRepository + 'static,
{
    let stored = service.result(&ResultId(result_id))?;
    Ok(Json(stored))
}

pub(crate) async fn profile_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(user_id): Path<String>,
) -> Result<Json<RespondentProfile>, AppError>
where
    R: ResultRepository + 'static,
{
    let profile = service.profile(&user_id)?;
    Ok(Json(profile))
}
