use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::AppState;
use crate::db::{ExhibitScheduleRow, MuseumExhibitCount, MuseumGalleryRow, Timed};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumGalleriesQuery {
    pub location: String,
    pub floor: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitSchedulesQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumExhibitCountsQuery {
    pub established_year: i32,
}

pub async fn get_museum_galleries(
    Query(params): Query<MuseumGalleriesQuery>,
    State(state): State<AppState>,
) -> Result<Json<Timed<Vec<MuseumGalleryRow>>>, AppError> {
    let result = state
        .repo
        .query_museum_gallery(&params.location, params.floor)
        .await?;
    Ok(Json(result))
}

pub async fn get_exhibit_schedules(
    Query(params): Query<ExhibitSchedulesQuery>,
    State(state): State<AppState>,
) -> Result<Json<Timed<Vec<ExhibitScheduleRow>>>, AppError> {
    if params.start_date > params.end_date {
        return Err(AppError::BadRequest(
            "startDate must be <= endDate".into(),
        ));
    }

    let result = state
        .repo
        .query_exhibit_schedule(params.start_date, params.end_date)
        .await?;
    Ok(Json(result))
}

pub async fn get_museum_exhibit_counts(
    Query(params): Query<MuseumExhibitCountsQuery>,
    State(state): State<AppState>,
) -> Result<Json<Timed<Vec<MuseumExhibitCount>>>, AppError> {
    let result = state
        .repo
        .query_museum_exhibit_count(params.established_year)
        .await?;
    Ok(Json(result))
}
