//! Exhibit CRUD operations for the repository.

use crate::db::RepoError;
use crate::domain::{Exhibit, ExhibitId, GalleryId, NewExhibit};
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;

use super::{rejected, Repository};

impl Repository {
    /// Insert an exhibit and return its generated id.
    pub async fn add_exhibit(&self, exhibit: &NewExhibit) -> Result<ExhibitId, RepoError> {
        exhibit.validate().map_err(|e| rejected("add_exhibit", e))?;

        let mut conn = self.pool.acquire().await?;
        insert_exhibit(&mut conn, exhibit)
            .await
            .map_err(|e| rejected("add_exhibit", e))
    }

    /// Fetch every exhibit, ordered by id.
    pub async fn get_exhibits(&self) -> Result<Vec<Exhibit>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT exhibit_id, name, description, year_created, gallery_id
            FROM exhibit
            ORDER BY exhibit_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(exhibit_from_row).collect::<Result<_, _>>()?)
    }

    /// Replace every field of an exhibit. Returns `false` if absent.
    pub async fn update_exhibit(
        &self,
        id: ExhibitId,
        exhibit: &NewExhibit,
    ) -> Result<bool, RepoError> {
        exhibit.validate().map_err(|e| rejected("update_exhibit", e))?;

        let result = sqlx::query(
            r#"
            UPDATE exhibit
            SET name = ?, description = ?, year_created = ?, gallery_id = ?
            WHERE exhibit_id = ?
            "#,
        )
        .bind(&exhibit.name)
        .bind(exhibit.description.as_deref())
        .bind(exhibit.year_created)
        .bind(exhibit.gallery_id.as_i64())
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| rejected("update_exhibit", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an exhibit by id. Returns `false` if absent.
    pub async fn delete_exhibit(&self, id: ExhibitId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM exhibit WHERE exhibit_id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| rejected("delete_exhibit", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn exhibit_from_row(row: &SqliteRow) -> Result<Exhibit, sqlx::Error> {
    Ok(Exhibit {
        id: ExhibitId::new(row.try_get("exhibit_id")?),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        year_created: row.try_get("year_created")?,
        gallery_id: GalleryId::new(row.try_get("gallery_id")?),
    })
}

pub(super) async fn insert_exhibit(
    conn: &mut SqliteConnection,
    exhibit: &NewExhibit,
) -> Result<ExhibitId, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO exhibit (name, description, year_created, gallery_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&exhibit.name)
    .bind(exhibit.description.as_deref())
    .bind(exhibit.year_created)
    .bind(exhibit.gallery_id.as_i64())
    .execute(&mut *conn)
    .await?;

    Ok(ExhibitId::new(result.last_insert_rowid()))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{count_rows, setup_test_db};
    use super::*;
    use crate::domain::{NewGallery, NewMuseum};

    async fn seed_gallery(repo: &Repository) -> GalleryId {
        let museum_id = repo
            .add_museum(&NewMuseum::new("Met", "New York", Some(1870)))
            .await
            .unwrap();
        repo.add_gallery(&NewGallery::new("Arms and Armor", Some(1), None, museum_id))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_and_get_exhibit() {
        let (repo, _temp) = setup_test_db().await;
        let gallery_id = seed_gallery(&repo).await;

        let exhibit = NewExhibit::new(
            "Armor of Henry II",
            Some("Parade armor, embossed steel".to_string()),
            Some(1555),
            gallery_id,
        );
        let id = repo.add_exhibit(&exhibit).await.unwrap();

        let exhibits = repo.get_exhibits().await.unwrap();
        assert_eq!(exhibits.len(), 1);
        assert_eq!(exhibits[0].id, id);
        assert_eq!(exhibits[0].fields(), exhibit);
    }

    #[tokio::test]
    async fn test_exhibit_with_unknown_gallery_is_rejected() {
        let (repo, _temp) = setup_test_db().await;

        let err = repo
            .add_exhibit(&NewExhibit::new("Lost", None, None, GalleryId::new(3)))
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::ConstraintViolation(_)));
        assert_eq!(count_rows(&repo, "exhibit").await, 0);
    }

    #[tokio::test]
    async fn test_update_exhibit_clears_optional_fields() {
        let (repo, _temp) = setup_test_db().await;
        let gallery_id = seed_gallery(&repo).await;
        let id = repo
            .add_exhibit(&NewExhibit::new(
                "Helmet",
                Some("Bronze".to_string()),
                Some(-500),
                gallery_id,
            ))
            .await
            .unwrap();

        let replacement = NewExhibit::new("Helmet", None, None, gallery_id);
        assert!(repo.update_exhibit(id, &replacement).await.unwrap());
        assert_eq!(repo.get_exhibits().await.unwrap()[0].fields(), replacement);
    }

    #[tokio::test]
    async fn test_delete_gallery_with_exhibits_is_rejected() {
        let (repo, _temp) = setup_test_db().await;
        let gallery_id = seed_gallery(&repo).await;
        let exhibit_id = repo
            .add_exhibit(&NewExhibit::new("Sword", None, None, gallery_id))
            .await
            .unwrap();

        assert!(matches!(
            repo.delete_gallery(gallery_id).await,
            Err(RepoError::ConstraintViolation(_))
        ));

        assert!(repo.delete_exhibit(exhibit_id).await.unwrap());
        assert!(!repo.delete_exhibit(exhibit_id).await.unwrap());
        assert!(repo.delete_gallery(gallery_id).await.unwrap());
    }
}
