//! Analytical read queries for the repository.
//!
//! Each query is parameter-bound and returns its rows wrapped in [`Timed`]
//! with the wall-clock time spent in the database round trip.

use crate::db::RepoError;
use crate::domain::schedule::format_date;
use crate::domain::MuseumId;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::Row;
use std::time::Instant;
use tracing::debug;

use super::schedules::date_column;
use super::{Repository, Timed};

/// A gallery on a given floor of a museum at a given location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumGalleryRow {
    pub museum_name: String,
    pub gallery_name: String,
    pub floor: i32,
}

/// An exhibit whose schedule falls inside a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitScheduleRow {
    pub exhibit_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Number of exhibits across all galleries of one museum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumExhibitCount {
    pub museum_id: MuseumId,
    pub museum_name: String,
    pub exhibit_count: i64,
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

impl Repository {
    /// Galleries on `floor` of museums located at `location`, deduplicated
    /// by (museum name, gallery name, floor).
    pub async fn query_museum_gallery(
        &self,
        location: &str,
        floor: i32,
    ) -> Result<Timed<Vec<MuseumGalleryRow>>, RepoError> {
        let started = Instant::now();
        let rows = sqlx::query(
            r#"
            SELECT m.name AS museum_name, g.name AS gallery_name, g.floor AS floor
            FROM museum m
            INNER JOIN gallery g ON m.museum_id = g.museum_id
            WHERE m.location = ? AND g.floor = ?
            GROUP BY m.name, g.name, g.floor
            ORDER BY m.name ASC, g.name ASC
            "#,
        )
        .bind(location)
        .bind(floor)
        .fetch_all(&self.pool)
        .await?;
        let elapsed_ms = elapsed_ms(started);

        let rows = rows
            .iter()
            .map(|row| {
                Ok(MuseumGalleryRow {
                    museum_name: row.try_get("museum_name")?,
                    gallery_name: row.try_get("gallery_name")?,
                    floor: row.try_get("floor")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        debug!(
            query = "museum_gallery",
            location,
            floor,
            rows = rows.len(),
            elapsed_ms,
            "Analytical query completed"
        );
        Ok(Timed { rows, elapsed_ms })
    }

    /// Schedules lying entirely within `[start, end]`, with their exhibit
    /// name, deduplicated by (exhibit name, start, end).
    pub async fn query_exhibit_schedule(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Timed<Vec<ExhibitScheduleRow>>, RepoError> {
        let started = Instant::now();
        let rows = sqlx::query(
            r#"
            SELECT e.name AS exhibit_name, s.start_date, s.end_date
            FROM exhibit e
            INNER JOIN exhibit_schedule s ON e.exhibit_id = s.exhibit_id
            WHERE s.start_date >= ? AND s.end_date <= ?
            GROUP BY e.name, s.start_date, s.end_date
            ORDER BY s.start_date ASC, e.name ASC, s.end_date ASC
            "#,
        )
        .bind(format_date(start))
        .bind(format_date(end))
        .fetch_all(&self.pool)
        .await?;
        let elapsed_ms = elapsed_ms(started);

        let rows = rows
            .iter()
            .map(|row| {
                Ok(ExhibitScheduleRow {
                    exhibit_name: row.try_get("exhibit_name")?,
                    start_date: date_column(row, "start_date")?,
                    end_date: date_column(row, "end_date")?,
                })
            })
            .collect::<Result<Vec<_>, RepoError>>()?;

        debug!(
            query = "exhibit_schedule",
            %start,
            %end,
            rows = rows.len(),
            elapsed_ms,
            "Analytical query completed"
        );
        Ok(Timed { rows, elapsed_ms })
    }

    /// Exhibit counts per museum established in or after `established_year`.
    ///
    /// Museums without exhibits, or without a recorded year, are not listed.
    pub async fn query_museum_exhibit_count(
        &self,
        established_year: i32,
    ) -> Result<Timed<Vec<MuseumExhibitCount>>, RepoError> {
        let started = Instant::now();
        let rows = sqlx::query(
            r#"
            SELECT m.museum_id, m.name AS museum_name, COUNT(e.exhibit_id) AS exhibit_count
            FROM museum m
            INNER JOIN gallery g ON m.museum_id = g.museum_id
            INNER JOIN exhibit e ON g.gallery_id = e.gallery_id
            WHERE m.established_year >= ?
            GROUP BY m.museum_id, m.name
            ORDER BY m.name ASC, m.museum_id ASC
            "#,
        )
        .bind(established_year)
        .fetch_all(&self.pool)
        .await?;
        let elapsed_ms = elapsed_ms(started);

        let rows = rows
            .iter()
            .map(|row| {
                Ok(MuseumExhibitCount {
                    museum_id: MuseumId::new(row.try_get("museum_id")?),
                    museum_name: row.try_get("museum_name")?,
                    exhibit_count: row.try_get("exhibit_count")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        debug!(
            query = "museum_exhibit_count",
            established_year,
            rows = rows.len(),
            elapsed_ms,
            "Analytical query completed"
        );
        Ok(Timed { rows, elapsed_ms })
    }
}
