use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

use super::validation::{FieldError, ValidationError};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    Validation(ValidationError),

    Unauthorized(String),

    Internal(String),
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Validation(err) => write!(f, "Validation error: {err}"),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    message: msg,
                    errors: None,
                },
            ),
            Self::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: err.to_string(),
                    errors: Some(err.errors),
                },
            ),
            Self::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    message: msg,
                    errors: None,
                },
            ),
            Self::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: "An internal error occurred".to_string(),
                        errors: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl ApiError {
    pub fn fortune_not_found(id: i64) -> Self {
        Self::NotFound(format!("Fortune {id} not found"))
    }

    pub fn saved_fortune_not_found(id: i64) -> Self {
        Self::NotFound(format!("Saved fortune {id} not found"))
    }

    pub fn no_fortunes() -> Self {
        Self::NotFound("No fortunes found".to_string())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::single("body", msg))
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
