use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::{AppState, CreatedDto};
use crate::domain::{Exhibit, ExhibitId, NewExhibit};
use crate::error::AppError;

pub async fn list_exhibits(State(state): State<AppState>) -> Result<Json<Vec<Exhibit>>, AppError> {
    Ok(Json(state.repo.get_exhibits().await?))
}

pub async fn create_exhibit(
    State(state): State<AppState>,
    Json(body): Json<NewExhibit>,
) -> Result<(StatusCode, Json<CreatedDto<ExhibitId>>), AppError> {
    let id = state.repo.add_exhibit(&body).await?;
    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

pub async fn update_exhibit(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(body): Json<NewExhibit>,
) -> Result<StatusCode, AppError> {
    let id = ExhibitId::new(id);
    if !state.repo.update_exhibit(id, &body).await? {
        return Err(AppError::NotFound(format!("exhibit {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_exhibit(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.repo.delete_exhibit(ExhibitId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
