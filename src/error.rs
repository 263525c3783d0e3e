use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// A single failed validation rule.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Everything a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("user already exists")]
    DuplicateUser,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid or expired token")]
    InvalidToken,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(err.into())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, "validation failed".into(), errors)
            }
            ApiError::DuplicateUser => {
                (StatusCode::BAD_REQUEST, "user already exists".into(), vec![])
            }
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalid credentials".into(),
                vec![],
            ),
            ApiError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "missing bearer token".into(),
                vec![],
            ),
            ApiError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "invalid or expired token".into(),
                vec![],
            ),
            // Full detail stays in the logs; the client gets a fixed message.
            ApiError::Internal(err) => {
                error!(error = ?err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".into(),
                    vec![],
                )
            }
        };
        (status, Json(ErrorBody { message, errors })).into_response()
    }
}
