//! Random demo data for seeding a catalog.

use crate::db::RepoError;
use crate::domain::{
    ExhibitId, GalleryId, MuseumId, NewExhibit, NewExhibitSchedule, NewGallery, NewMuseum,
};
use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::sqlite::SqliteConnection;
use tracing::{info, warn};

use super::exhibits::insert_exhibit;
use super::galleries::insert_gallery;
use super::museums::insert_museum;
use super::schedules::insert_schedule;
use super::Repository;

/// Parent tables a generated row can reference.
#[derive(Debug, Clone, Copy)]
enum ParentTable {
    Museum,
    Gallery,
    Exhibit,
}

impl ParentTable {
    fn name(self) -> &'static str {
        match self {
            ParentTable::Museum => "museum",
            ParentTable::Gallery => "gallery",
            ParentTable::Exhibit => "exhibit",
        }
    }

    fn count_sql(self) -> &'static str {
        match self {
            ParentTable::Museum => "SELECT COUNT(*) FROM museum",
            ParentTable::Gallery => "SELECT COUNT(*) FROM gallery",
            ParentTable::Exhibit => "SELECT COUNT(*) FROM exhibit",
        }
    }

    fn nth_id_sql(self) -> &'static str {
        match self {
            ParentTable::Museum => "SELECT museum_id FROM museum ORDER BY museum_id LIMIT 1 OFFSET ?",
            ParentTable::Gallery => {
                "SELECT gallery_id FROM gallery ORDER BY gallery_id LIMIT 1 OFFSET ?"
            }
            ParentTable::Exhibit => {
                "SELECT exhibit_id FROM exhibit ORDER BY exhibit_id LIMIT 1 OFFSET ?"
            }
        }
    }
}

/// Pick an existing id uniformly at random.
///
/// # Errors
/// Returns `NoParentRows` when the table is empty rather than producing a
/// dangling reference.
async fn random_existing_id<R: Rng + Send>(
    conn: &mut SqliteConnection,
    table: ParentTable,
    rng: &mut R,
) -> Result<i64, RepoError> {
    let count: i64 = sqlx::query_scalar(table.count_sql())
        .fetch_one(&mut *conn)
        .await?;
    if count == 0 {
        return Err(RepoError::NoParentRows {
            table: table.name(),
        });
    }

    let offset = rng.gen_range(0..count);
    let id: i64 = sqlx::query_scalar(table.nth_id_sql())
        .bind(offset)
        .fetch_one(&mut *conn)
        .await?;
    Ok(id)
}

fn random_museum<R: Rng>(rng: &mut R) -> NewMuseum {
    NewMuseum::new(
        format!("Museum {}", rng.gen_range(1..=1000)),
        format!("Location {}", rng.gen_range(1..=100)),
        Some(rng.gen_range(1900..2023)),
    )
}

fn random_gallery<R: Rng>(rng: &mut R, museum_id: MuseumId) -> NewGallery {
    NewGallery::new(
        format!("Gallery {}", rng.gen_range(1..=1000)),
        Some(rng.gen_range(1..=10)),
        Some(format!("Theme {}", rng.gen_range(1..=100))),
        museum_id,
    )
}

fn random_exhibit<R: Rng>(rng: &mut R, gallery_id: GalleryId) -> NewExhibit {
    NewExhibit::new(
        format!("Exhibit {}", rng.gen_range(1..=1000)),
        Some(format!("Description {}", rng.gen_range(1..=1000))),
        Some(rng.gen_range(1800..2023)),
        gallery_id,
    )
}

/// Start within the coming year, end in the year after.
fn random_schedule<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    exhibit_id: ExhibitId,
    gallery_id: GalleryId,
) -> NewExhibitSchedule {
    let start_offset = rng.gen_range(0..365);
    let end_offset = rng.gen_range(365..730);
    NewExhibitSchedule::new(
        today + Days::new(start_offset),
        today + Days::new(end_offset),
        exhibit_id,
        gallery_id,
    )
}

impl Repository {
    /// Insert `iterations` rounds of random museum, gallery, exhibit and
    /// schedule rows. Returns the number of rounds committed.
    ///
    /// Each round commits on its own. A failure stops the loop and leaves
    /// earlier rounds in place.
    pub async fn generate_random_data(&self, iterations: u32) -> Result<u32, RepoError> {
        let mut rng = StdRng::from_entropy();
        let today = Utc::now().date_naive();
        self.generate_random_data_with(iterations, &mut rng, today)
            .await
    }

    /// Like [`generate_random_data`](Self::generate_random_data) with a
    /// caller-supplied RNG and reference date.
    pub async fn generate_random_data_with<R: Rng + Send>(
        &self,
        iterations: u32,
        rng: &mut R,
        today: NaiveDate,
    ) -> Result<u32, RepoError> {
        for completed in 0..iterations {
            if let Err(e) = self.generate_one_round(rng, today).await {
                warn!(completed, requested = iterations, error = %e, "Random data generation stopped early");
                return Err(e);
            }
        }

        info!(iterations, "Random data generated");
        Ok(iterations)
    }

    async fn generate_one_round<R: Rng + Send>(
        &self,
        rng: &mut R,
        today: NaiveDate,
    ) -> Result<(), RepoError> {
        let mut tx = self.pool.begin().await?;

        insert_museum(&mut tx, &random_museum(rng)).await?;

        let museum_id = MuseumId::new(random_existing_id(&mut tx, ParentTable::Museum, rng).await?);
        insert_gallery(&mut tx, &random_gallery(rng, museum_id)).await?;

        let gallery_id =
            GalleryId::new(random_existing_id(&mut tx, ParentTable::Gallery, rng).await?);
        insert_exhibit(&mut tx, &random_exhibit(rng, gallery_id)).await?;

        let exhibit_id =
            ExhibitId::new(random_existing_id(&mut tx, ParentTable::Exhibit, rng).await?);
        let schedule_gallery_id =
            GalleryId::new(random_existing_id(&mut tx, ParentTable::Gallery, rng).await?);
        insert_schedule(
            &mut tx,
            &random_schedule(rng, today, exhibit_id, schedule_gallery_id),
        )
        .await?;

        tx.commit().await?;
        Ok(())
    }
}
