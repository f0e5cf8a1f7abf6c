//! Museum CRUD operations for the repository.

use crate::db::RepoError;
use crate::domain::{Museum, MuseumId, NewMuseum};
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;

use super::{rejected, Repository};

impl Repository {
    /// Insert a museum and return its generated id.
    ///
    /// # Errors
    /// Returns `InvalidField` if a field is blank or too wide, or a database
    /// error if the insert fails.
    pub async fn add_museum(&self, museum: &NewMuseum) -> Result<MuseumId, RepoError> {
        museum.validate().map_err(|e| rejected("add_museum", e))?;

        let mut conn = self.pool.acquire().await?;
        insert_museum(&mut conn, museum)
            .await
            .map_err(|e| rejected("add_museum", e))
    }

    /// Fetch every museum, ordered by id.
    pub async fn get_museums(&self) -> Result<Vec<Museum>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT museum_id, name, location, established_year
            FROM museum
            ORDER BY museum_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(museum_from_row).collect::<Result<_, _>>()?)
    }

    /// Replace every field of a museum.
    ///
    /// Returns `false` without touching the table if no museum has this id.
    pub async fn update_museum(&self, id: MuseumId, museum: &NewMuseum) -> Result<bool, RepoError> {
        museum.validate().map_err(|e| rejected("update_museum", e))?;

        let result = sqlx::query(
            r#"
            UPDATE museum
            SET name = ?, location = ?, established_year = ?
            WHERE museum_id = ?
            "#,
        )
        .bind(&museum.name)
        .bind(&museum.location)
        .bind(museum.established_year)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| rejected("update_museum", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a museum by id. Returns `false` if it did not exist.
    ///
    /// # Errors
    /// Returns `ConstraintViolation` while galleries still reference it.
    pub async fn delete_museum(&self, id: MuseumId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM museum WHERE museum_id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| rejected("delete_museum", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn museum_from_row(row: &SqliteRow) -> Result<Museum, sqlx::Error> {
    Ok(Museum {
        id: MuseumId::new(row.try_get("museum_id")?),
        name: row.try_get("name")?,
        location: row.try_get("location")?,
        established_year: row.try_get("established_year")?,
    })
}

pub(super) async fn insert_museum(
    conn: &mut SqliteConnection,
    museum: &NewMuseum,
) -> Result<MuseumId, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO museum (name, location, established_year)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&museum.name)
    .bind(&museum.location)
    .bind(museum.established_year)
    .execute(&mut *conn)
    .await?;

    Ok(MuseumId::new(result.last_insert_rowid()))
}
