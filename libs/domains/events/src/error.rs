use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("No event found to link the participant to. Create an event first.")]
    NoEventsToLink,

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Error body returned for all failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error kind
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            DomainError::InvalidId(id) => {
                tracing::info!("Invalid identifier in request path: {}", id);
                (StatusCode::BAD_REQUEST, "BadRequest")
            }
            DomainError::InvalidBody(details) => {
                tracing::info!("Request body rejected: {}", details);
                (StatusCode::BAD_REQUEST, "BadRequest")
            }
            DomainError::NotFound(what) => {
                tracing::info!("{} not found", what);
                (StatusCode::NOT_FOUND, "NotFound")
            }
            DomainError::NoEventsToLink => {
                tracing::info!("Participant registration rejected: no events exist");
                (StatusCode::NOT_FOUND, "NotFound")
            }
            DomainError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalServerError")
            }
            DomainError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalServerError")
            }
        };

        // Messages are passed through unredacted, including store errors.
        let body = Json(ErrorResponse {
            error: kind.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
