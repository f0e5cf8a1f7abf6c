use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::{AppState, CreatedDto};
use crate::domain::{Gallery, GalleryId, NewGallery};
use crate::error::AppError;

pub async fn list_galleries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Gallery>>, AppError> {
    Ok(Json(state.repo.get_galleries().await?))
}

pub async fn create_gallery(
    State(state): State<AppState>,
    Json(body): Json<NewGallery>,
) -> Result<(StatusCode, Json<CreatedDto<GalleryId>>), AppError> {
    let id = state.repo.add_gallery(&body).await?;
    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

pub async fn update_gallery(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(body): Json<NewGallery>,
) -> Result<StatusCode, AppError> {
    let id = GalleryId::new(id);
    if !state.repo.update_gallery(id, &body).await? {
        return Err(AppError::NotFound(format!("gallery {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_gallery(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.repo.delete_gallery(GalleryId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
