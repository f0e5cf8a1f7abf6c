pub mod exhibits;
pub mod galleries;
pub mod generate;
pub mod health;
pub mod museums;
pub mod queries;
pub mod schedules;

use crate::db::Repository;
use axum::{
    routing::{get, post, put},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }
}

/// Body returned by every create endpoint.
#[derive(Debug, Serialize)]
pub struct CreatedDto<Id> {
    pub id: Id,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route(
            "/v1/museums",
            get(museums::list_museums).post(museums::create_museum),
        )
        .route(
            "/v1/museums/:id",
            put(museums::update_museum).delete(museums::delete_museum),
        )
        .route(
            "/v1/galleries",
            get(galleries::list_galleries).post(galleries::create_gallery),
        )
        .route(
            "/v1/galleries/:id",
            put(galleries::update_gallery).delete(galleries::delete_gallery),
        )
        .route(
            "/v1/exhibits",
            get(exhibits::list_exhibits).post(exhibits::create_exhibit),
        )
        .route(
            "/v1/exhibits/:id",
            put(exhibits::update_exhibit).delete(exhibits::delete_exhibit),
        )
        .route(
            "/v1/schedules",
            get(schedules::list_schedules).post(schedules::create_schedule),
        )
        .route(
            "/v1/schedules/:id",
            put(schedules::update_schedule).delete(schedules::delete_schedule),
        )
        .route(
            "/v1/queries/museum-galleries",
            get(queries::get_museum_galleries),
        )
        .route(
            "/v1/queries/exhibit-schedules",
            get(queries::get_exhibit_schedules),
        )
        .route(
            "/v1/queries/museum-exhibit-counts",
            get(queries::get_museum_exhibit_counts),
        )
        .route("/v1/generate", post(generate::generate))
        .layer(cors)
        .with_state(state)
}
