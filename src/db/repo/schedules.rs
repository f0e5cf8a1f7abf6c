//! Exhibit schedule CRUD operations for the repository.

use crate::db::RepoError;
use crate::domain::schedule::{format_date, parse_date};
use crate::domain::{ExhibitId, ExhibitSchedule, GalleryId, NewExhibitSchedule, ScheduleId};
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;

use super::{rejected, Repository};

impl Repository {
    /// Insert a schedule and return its generated id.
    ///
    /// The schedule's gallery is stored as given; it is not checked against
    /// the exhibit's own gallery.
    pub async fn add_exhibit_schedule(
        &self,
        schedule: &NewExhibitSchedule,
    ) -> Result<ScheduleId, RepoError> {
        let mut conn = self.pool.acquire().await?;
        insert_schedule(&mut conn, schedule)
            .await
            .map_err(|e| rejected("add_exhibit_schedule", e))
    }

    /// Fetch every schedule, ordered by id.
    pub async fn get_exhibit_schedules(&self) -> Result<Vec<ExhibitSchedule>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT exhibit_schedule_id, start_date, end_date, exhibit_id, gallery_id
            FROM exhibit_schedule
            ORDER BY exhibit_schedule_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(schedule_from_row).collect()
    }

    /// Replace every field of a schedule. Returns `false` if absent.
    pub async fn update_exhibit_schedule(
        &self,
        id: ScheduleId,
        schedule: &NewExhibitSchedule,
    ) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE exhibit_schedule
            SET start_date = ?, end_date = ?, exhibit_id = ?, gallery_id = ?
            WHERE exhibit_schedule_id = ?
            "#,
        )
        .bind(format_date(schedule.start_date))
        .bind(format_date(schedule.end_date))
        .bind(schedule.exhibit_id.as_i64())
        .bind(schedule.gallery_id.as_i64())
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| rejected("update_exhibit_schedule", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a schedule by id. Returns `false` if absent.
    pub async fn delete_exhibit_schedule(&self, id: ScheduleId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM exhibit_schedule WHERE exhibit_schedule_id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| rejected("delete_exhibit_schedule", e))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Decode a stored ISO date column.
pub(super) fn date_column(row: &SqliteRow, column: &str) -> Result<NaiveDate, RepoError> {
    let value: String = row.try_get(column)?;
    parse_date(&value).map_err(|_| RepoError::CorruptDate { value })
}

fn schedule_from_row(row: &SqliteRow) -> Result<ExhibitSchedule, RepoError> {
    Ok(ExhibitSchedule {
        id: ScheduleId::new(row.try_get("exhibit_schedule_id")?),
        start_date: date_column(row, "start_date")?,
        end_date: date_column(row, "end_date")?,
        exhibit_id: ExhibitId::new(row.try_get("exhibit_id")?),
        gallery_id: GalleryId::new(row.try_get("gallery_id")?),
    })
}

pub(super) async fn insert_schedule(
    conn: &mut SqliteConnection,
    schedule: &NewExhibitSchedule,
) -> Result<ScheduleId, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO exhibit_schedule (start_date, end_date, exhibit_id, gallery_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(format_date(schedule.start_date))
    .bind(format_date(schedule.end_date))
    .bind(schedule.exhibit_id.as_i64())
    .bind(schedule.gallery_id.as_i64())
    .execute(&mut *conn)
    .await?;

    Ok(ScheduleId::new(result.last_insert_rowid()))
}
