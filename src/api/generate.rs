use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::error::AppError;

/// Upper bound on rounds per request.
pub const MAX_ITERATIONS: u32 = 10_000;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub iterations: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub iterations: u32,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if body.iterations > MAX_ITERATIONS {
        return Err(AppError::BadRequest(format!(
            "iterations must be <= {}",
            MAX_ITERATIONS
        )));
    }

    let iterations = state.repo.generate_random_data(body.iterations).await?;
    Ok(Json(GenerateResponse { iterations }))
}
