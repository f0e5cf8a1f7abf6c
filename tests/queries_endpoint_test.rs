use axum::http::StatusCode;
use chrono::NaiveDate;
use museum_catalog::api;
use museum_catalog::db::init_db;
use museum_catalog::{
    MuseumId, NewExhibit, NewExhibitSchedule, NewGallery, NewMuseum, Repository,
};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

struct TestApp {
    app: axum::Router,
    repo: Arc<Repository>,
    _temp: TempDir,
}

async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path, 1).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool));
    let app = api::create_router(api::AppState::new(repo.clone()));

    TestApp {
        app,
        repo,
        _temp: temp_dir,
    }
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Two museums in different cities, each with a third-floor gallery holding
/// one scheduled exhibit.
async fn seed_catalog(repo: &Repository) -> MuseumId {
    let in_x = repo
        .add_museum(&NewMuseum::new("Museum X", "X", Some(1990)))
        .await
        .unwrap();
    let in_y = repo
        .add_museum(&NewMuseum::new("Museum Y", "Y", Some(1850)))
        .await
        .unwrap();

    for (museum_id, gallery, exhibit) in [(in_x, "Maps", "Atlas"), (in_y, "Coins", "Denarius")] {
        let gallery_id = repo
            .add_gallery(&NewGallery::new(gallery, Some(3), None, museum_id))
            .await
            .unwrap();
        let exhibit_id = repo
            .add_exhibit(&NewExhibit::new(exhibit, None, None, gallery_id))
            .await
            .unwrap();
        repo.add_exhibit_schedule(&NewExhibitSchedule::new(
            date(2024, 1, 1),
            date(2024, 6, 1),
            exhibit_id,
            gallery_id,
        ))
        .await
        .unwrap();
    }

    in_x
}

#[tokio::test]
async fn test_museum_galleries_query_filters_by_location() {
    let test_app = setup_test_app().await;
    seed_catalog(&test_app.repo).await;

    let (status, json) = get(
        test_app.app,
        "/v1/queries/museum-galleries?location=X&floor=3",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["museumName"], "Museum X");
    assert_eq!(rows[0]["galleryName"], "Maps");
    assert_eq!(rows[0]["floor"], 3);
    assert!(json["elapsedMs"].is_f64());
}

#[tokio::test]
async fn test_exhibit_schedules_query_range() {
    let test_app = setup_test_app().await;
    seed_catalog(&test_app.repo).await;

    let (status, json) = get(
        test_app.app.clone(),
        "/v1/queries/exhibit-schedules?startDate=2024-01-01&endDate=2024-06-01",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["exhibitName"], "Atlas");
    assert_eq!(rows[0]["startDate"], "2024-01-01");

    let (_, json) = get(
        test_app.app,
        "/v1/queries/exhibit-schedules?startDate=2024-02-01&endDate=2024-05-01",
    )
    .await;
    assert!(json["rows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_exhibit_schedules_query_rejects_inverted_range() {
    let test_app = setup_test_app().await;

    let (status, json) = get(
        test_app.app,
        "/v1/queries/exhibit-schedules?startDate=2024-06-01&endDate=2024-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_exhibit_schedules_query_rejects_malformed_date() {
    let test_app = setup_test_app().await;

    let (status, _) = get(
        test_app.app,
        "/v1/queries/exhibit-schedules?startDate=yesterday&endDate=2024-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_museum_exhibit_counts_query() {
    let test_app = setup_test_app().await;
    let museum_x = seed_catalog(&test_app.repo).await;

    let (status, json) = get(
        test_app.app.clone(),
        "/v1/queries/museum-exhibit-counts?establishedYear=1900",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["museumId"], museum_x.as_i64());
    assert_eq!(rows[0]["museumName"], "Museum X");
    assert_eq!(rows[0]["exhibitCount"], 1);

    let (_, json) = get(
        test_app.app,
        "/v1/queries/museum-exhibit-counts?establishedYear=1800",
    )
    .await;
    assert_eq!(json["rows"].as_array().unwrap().len(), 2);
}
