//! Service errors and their HTTP mapping

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("User with id = {0} not found")]
    NotFound(Uuid),
    #[error("Insufficient funds for transfer")]
    InsufficientFunds,
    #[error("User with email {0} already exists")]
    Conflict(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            // Unknown ids stay at 400 for compatibility with existing clients
            ServiceError::InvalidInput(_)
            | ServiceError::NotFound(_)
            | ServiceError::InsufficientFunds => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Malformed bodies and query strings are client input errors like any other
impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ServiceError {
    fn from(rejection: QueryRejection) -> Self {
        ServiceError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            ServiceError::Internal(e) => {
                tracing::error!("Unexpected error: {:?}", e);
                "Internal server error".to_string()
            }
            other => {
                tracing::warn!("Validation error: {}", other);
                other.to_string()
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_kind_to_status() {
        assert_eq!(
            ServiceError::Conflict("a@example.com".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::InvalidInput("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::NotFound(Uuid::new_v4()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::InsufficientFunds.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn internal_error_body_is_opaque() {
        let response =
            ServiceError::Internal(anyhow::anyhow!("secret connection string")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let err: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.detail, "Internal server error");
    }

    #[test]
    fn message_is_not_used_for_mapping() {
        // Message text mentioning a conflict must not change the status
        let err = ServiceError::InvalidInput("email already exists".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
