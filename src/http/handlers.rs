//! One handler per route. Each either answers from the repositories or
//! returns an [`AppError`], which decides the status code.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

use super::error::AppError;
use super::state::AppState;
use crate::storage::dto::{
    MissionDto, NewMission, NewScientist, PlanetSummary, ScientistDto, ScientistSummary,
};
use crate::storage::repository::{MissionRepository, PlanetRepository, ScientistRepository};

pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Anything that cannot be decoded into the expected body counts as a validation failure.
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(v)| v)
        .map_err(|e| AppError::Validation(e.body_text()))
}

/// A non-numeric id can never match a row.
fn scientist_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound("Scientist"))
}

/// GET /
pub async fn home() -> StatusCode {
    StatusCode::OK
}

/// GET /scientists
pub async fn list_scientists(State(state): State<AppState>) -> HandlerResult<Vec<ScientistSummary>> {
    Ok(Json(ScientistRepository::list(&state.db).await?))
}

/// POST /scientists
pub async fn create_scientist(
    State(state): State<AppState>,
    payload: Result<Json<NewScientist>, JsonRejection>,
) -> Result<(StatusCode, Json<ScientistDto>), AppError> {
    let new = body(payload)?;
    let created = ScientistRepository::create(&state.db, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /scientists/{id}
pub async fn get_scientist(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> HandlerResult<ScientistDto> {
    let id = scientist_id(id)?;
    Ok(Json(ScientistRepository::find_by_id(&state.db, id).await?))
}

/// PATCH /scientists/{id}
///
/// The scientist is looked up before the body is inspected, so an unknown id
/// is a 404 whatever the payload.
pub async fn update_scientist(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ScientistSummary>), AppError> {
    let id = scientist_id(id)?;
    let current = ScientistRepository::find_model(&state.db, id).await?;

    let patch: Map<String, Value> = match body(payload)? {
        Value::Object(map) => map,
        other => {
            return Err(AppError::Validation(format!(
                "expected a JSON object, got {other}"
            )))
        }
    };
    let updated = ScientistRepository::update(&state.db, current, &patch).await?;
    Ok((StatusCode::ACCEPTED, Json(updated)))
}

/// DELETE /scientists/{id}
pub async fn delete_scientist(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = scientist_id(id)?;
    ScientistRepository::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /planets
pub async fn list_planets(State(state): State<AppState>) -> HandlerResult<Vec<PlanetSummary>> {
    Ok(Json(PlanetRepository::list(&state.db).await?))
}

/// POST /missions
pub async fn create_mission(
    State(state): State<AppState>,
    payload: Result<Json<NewMission>, JsonRejection>,
) -> Result<(StatusCode, Json<MissionDto>), AppError> {
    let new = body(payload)?;
    let created = MissionRepository::create(&state.db, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
