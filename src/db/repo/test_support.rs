use super::Repository;
use crate::db::migrations::init_db;
use tempfile::TempDir;

pub(super) async fn setup_test_db() -> (Repository, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path, 1).await.expect("init_db failed");
    (Repository::new(pool), temp_dir)
}

pub(super) async fn count_rows(repo: &Repository, table: &str) -> i64 {
    // Test-only helper; table names are literals in the calling tests.
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&repo.pool)
        .await
        .expect("count failed")
}
