//! Gallery CRUD operations for the repository.

use crate::db::RepoError;
use crate::domain::{Gallery, GalleryId, MuseumId, NewGallery};
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;

use super::{rejected, Repository};

impl Repository {
    /// Insert a gallery and return its generated id.
    ///
    /// # Errors
    /// Returns `ConstraintViolation` if `museum_id` does not reference an
    /// existing museum; no row is created in that case.
    pub async fn add_gallery(&self, gallery: &NewGallery) -> Result<GalleryId, RepoError> {
        gallery.validate().map_err(|e| rejected("add_gallery", e))?;

        let mut conn = self.pool.acquire().await?;
        insert_gallery(&mut conn, gallery)
            .await
            .map_err(|e| rejected("add_gallery", e))
    }

    /// Fetch every gallery, ordered by id.
    pub async fn get_galleries(&self) -> Result<Vec<Gallery>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT gallery_id, name, floor, theme, museum_id
            FROM gallery
            ORDER BY gallery_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(gallery_from_row).collect::<Result<_, _>>()?)
    }

    /// Replace every field of a gallery, including its museum.
    ///
    /// Returns `false` if no gallery has this id.
    pub async fn update_gallery(
        &self,
        id: GalleryId,
        gallery: &NewGallery,
    ) -> Result<bool, RepoError> {
        gallery.validate().map_err(|e| rejected("update_gallery", e))?;

        let result = sqlx::query(
            r#"
            UPDATE gallery
            SET name = ?, floor = ?, theme = ?, museum_id = ?
            WHERE gallery_id = ?
            "#,
        )
        .bind(&gallery.name)
        .bind(gallery.floor)
        .bind(gallery.theme.as_deref())
        .bind(gallery.museum_id.as_i64())
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| rejected("update_gallery", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a gallery by id. Returns `false` if it did not exist.
    pub async fn delete_gallery(&self, id: GalleryId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM gallery WHERE gallery_id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| rejected("delete_gallery", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn gallery_from_row(row: &SqliteRow) -> Result<Gallery, sqlx::Error> {
    Ok(Gallery {
        id: GalleryId::new(row.try_get("gallery_id")?),
        name: row.try_get("name")?,
        floor: row.try_get("floor")?,
        theme: row.try_get("theme")?,
        museum_id: MuseumId::new(row.try_get("museum_id")?),
    })
}

pub(super) async fn insert_gallery(
    conn: &mut SqliteConnection,
    gallery: &NewGallery,
) -> Result<GalleryId, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO gallery (name, floor, theme, museum_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&gallery.name)
    .bind(gallery.floor)
    .bind(gallery.theme.as_deref())
    .bind(gallery.museum_id.as_i64())
    .execute(&mut *conn)
    .await?;

    Ok(GalleryId::new(result.last_insert_rowid()))
}
