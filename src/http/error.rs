//! Mapping from storage outcomes to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};
use serde_json::json;

use crate::storage::StoreError;

/// Errors a handler can end with. Causes are logged, never echoed.
#[derive(Debug)]
pub enum AppError {
    /// 404 with `{"error": "<Entity> not found"}`
    NotFound(&'static str),
    /// 400 with the generic `{"errors": ["validation errors"]}` payload
    Validation(String),
    /// 500; the store failed for reasons unrelated to the request body
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{entity} not found") })),
            )
                .into_response(),
            AppError::Validation(cause) => {
                warn!("rejected write: {}", cause);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "errors": ["validation errors"] })),
                )
                    .into_response()
            }
            AppError::Internal(cause) => {
                error!("store failure: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(entity) => AppError::NotFound(entity),
            StoreError::Validation(msg) => AppError::Validation(msg),
            StoreError::Db(e) => AppError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_names_the_entity() {
        let resp = AppError::from(StoreError::NotFound("Scientist")).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await, json!({"error": "Scientist not found"}));
    }

    #[tokio::test]
    async fn validation_cause_is_not_echoed() {
        let resp = AppError::Validation("name must not be empty".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await, json!({"errors": ["validation errors"]}));
    }

    #[tokio::test]
    async fn db_errors_are_internal() {
        let err = StoreError::Db(sea_orm::DbErr::Custom("x".into()));
        let resp = AppError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
