use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::{AppState, CreatedDto};
use crate::domain::{Museum, MuseumId, NewMuseum};
use crate::error::AppError;

pub async fn list_museums(State(state): State<AppState>) -> Result<Json<Vec<Museum>>, AppError> {
    Ok(Json(state.repo.get_museums().await?))
}

pub async fn create_museum(
    State(state): State<AppState>,
    Json(body): Json<NewMuseum>,
) -> Result<(StatusCode, Json<CreatedDto<MuseumId>>), AppError> {
    let id = state.repo.add_museum(&body).await?;
    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

pub async fn update_museum(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(body): Json<NewMuseum>,
) -> Result<StatusCode, AppError> {
    let id = MuseumId::new(id);
    if !state.repo.update_museum(id, &body).await? {
        return Err(AppError::NotFound(format!("museum {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_museum(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.repo.delete_museum(MuseumId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
