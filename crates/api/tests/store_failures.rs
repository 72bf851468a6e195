//! Behaviour when the record store itself fails.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use brinquedos_api::router::build_app_router;
use brinquedos_api::state::AppState;
use brinquedos_core::types::DbId;
use brinquedos_db::models::toy::{Toy, ToyFields};
use brinquedos_db::store::ToyStore;
use common::{body_json, get, post_json};
use serde_json::json;

/// A store whose backend is unreachable.
struct UnavailableStore;

fn unavailable() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}

#[async_trait]
impl ToyStore for UnavailableStore {
    async fn find_all(&self) -> Result<Vec<Toy>, sqlx::Error> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Toy>, sqlx::Error> {
        Err(unavailable())
    }

    async fn save(&self, _id: Option<DbId>, _fields: &ToyFields) -> Result<Toy, sqlx::Error> {
        Err(unavailable())
    }

    async fn exists_by_id(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(unavailable())
    }
}

fn build_failing_app() -> axum::Router {
    let config = common::test_config();
    let state = AppState::new(Arc::new(UnavailableStore), Arc::new(config.clone()));
    build_app_router(state, &config)
}

#[tokio::test]
async fn list_maps_store_failure_to_500() {
    let app = build_failing_app();
    let response = get(&app, "/brinquedos").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn create_maps_store_failure_to_500() {
    let app = build_failing_app();
    let response = post_json(&app, "/brinquedos", json!({"name": "Bola"})).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_reports_degraded_store() {
    let app = build_failing_app();
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}
