//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules by table:
//! - `museums.rs`, `galleries.rs`, `exhibits.rs`, `schedules.rs` - per-entity CRUD
//! - `queries.rs` - timed analytical joins and aggregates
//! - `generator.rs` - random demo data
//!
//! Every write returns an explicit `Result`. Update and delete report whether
//! a row with the given id existed; an absent id is a no-op, not an error.
//! Each call checks a connection out of the pool (or opens a transaction) and
//! returns it on drop, so nothing leaks on early return.

mod exhibits;
mod galleries;
mod generator;
mod museums;
mod queries;
mod schedules;

#[cfg(test)]
mod test_support;

pub use queries::{ExhibitScheduleRow, MuseumExhibitCount, MuseumGalleryRow};

use crate::db::RepoError;
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use tracing::warn;

/// A query result paired with its wall-clock execution time.
///
/// The timing is diagnostic only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timed<T> {
    pub rows: T,
    pub elapsed_ms: f64,
}

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Round-trip a trivial statement to confirm the store is reachable.
    pub async fn ping(&self) -> Result<(), RepoError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Log a failed write at the operation boundary and hand the error back.
fn rejected(operation: &'static str, err: impl Into<RepoError>) -> RepoError {
    let err = err.into();
    warn!(operation, error = %err, "catalog write rejected");
    err
}
