#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use mission_control::config::DbConfig;
use mission_control::storage::dto::{NewPlanet, NewScientist, PlanetSummary, ScientistDto};
use mission_control::storage::establish_connection;
use mission_control::storage::repository::{PlanetRepository, ScientistRepository};
use mission_control::{create_router, AppState};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

pub async fn setup_db() -> DatabaseConnection {
    establish_connection(&DbConfig::in_memory()).await.unwrap()
}

pub fn app(db: &DatabaseConnection) -> Router {
    create_router(AppState::new(db.clone()), Duration::from_secs(5))
}

/// Sends one request and returns the status with the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn seed_planet(db: &DatabaseConnection, name: &str) -> PlanetSummary {
    PlanetRepository::create(
        db,
        NewPlanet {
            name: Some(name.to_string()),
            distance_from_earth: Some(4_200_000),
            nearest_star: Some("Proxima Centauri".to_string()),
        },
    )
    .await
    .unwrap()
}

pub async fn seed_scientist(db: &DatabaseConnection, name: &str) -> ScientistDto {
    ScientistRepository::create(
        db,
        NewScientist {
            name: Some(name.to_string()),
            field_of_study: Some("astrobiology".to_string()),
        },
    )
    .await
    .unwrap()
}
