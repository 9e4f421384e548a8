//! Application error type shared by repositories, services and handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
}

/// Errors produced inside the service.
///
/// `details` carry diagnostic context for logs only. They are never written
/// into a response body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    /// Backing service temporarily unreachable (pool exhausted, I/O, timeout).
    #[error("{message}")]
    Unavailable { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns true for failures worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message)
            }
            AppError::Unavailable { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "unavailable",
                "Service temporarily unavailable".to_string(),
            ),
            AppError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal error".to_string(),
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::unavailable(
                    "Database unavailable",
                    serde_json::json!({ "reason": e.to_string() }),
                )
            }
            other => AppError::internal(
                "Database error",
                serde_json::json!({ "reason": other.to_string() }),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pool_timeout_is_transient() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert!(err.is_transient());
    }

    #[test]
    fn test_row_not_found_is_not_transient() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(!err.is_transient());
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_internal_error_hides_details() {
        let response =
            AppError::internal("secret failure", json!({ "dsn": "postgres://x" })).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unauthorized_status() {
        let response = AppError::unauthorized("nope", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
