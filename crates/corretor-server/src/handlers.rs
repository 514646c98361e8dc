use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::{EvaluateRequest, EvaluateResponse};
use crate::error::AppError;
use crate::ServerState;

/// Rejects empty or whitespace-only submissions before the pipeline (and
/// the external service behind it) is ever touched.
fn validate(request: &EvaluateRequest) -> Result<(), AppError> {
    if request.theme.trim().is_empty() {
        return Err(AppError::Validation(
            "The theme is missing. Please provide a valid theme.".into(),
        ));
    }
    if request.essay.trim().is_empty() {
        return Err(AppError::Validation(
            "The essay is missing. Please provide a valid essay.".into(),
        ));
    }
    Ok(())
}

pub async fn evaluate(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    validate(&request)?;

    info!(essay_chars = request.essay.len(), "evaluation requested");
    let evaluation = state.pipeline.evaluate(&request.essay, &request.theme).await?;

    Ok(Json(EvaluateResponse::from(evaluation)))
}

pub async fn health() -> &'static str {
    "ok"
}
