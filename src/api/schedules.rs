use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::{AppState, CreatedDto};
use crate::domain::{ExhibitSchedule, NewExhibitSchedule, ScheduleId};
use crate::error::AppError;

pub async fn list_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExhibitSchedule>>, AppError> {
    Ok(Json(state.repo.get_exhibit_schedules().await?))
}

pub async fn create_schedule(
    State(state): State<AppState>,
    Json(body): Json<NewExhibitSchedule>,
) -> Result<(StatusCode, Json<CreatedDto<ScheduleId>>), AppError> {
    let id = state.repo.add_exhibit_schedule(&body).await?;
    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

pub async fn update_schedule(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(body): Json<NewExhibitSchedule>,
) -> Result<StatusCode, AppError> {
    let id = ScheduleId::new(id);
    if !state.repo.update_exhibit_schedule(id, &body).await? {
        return Err(AppError::NotFound(format!("schedule {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_schedule(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.repo.delete_exhibit_schedule(ScheduleId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
