//! Application error type and HTTP response mapping.
//!
//! Every failure surfaced to a caller goes through [`AppError`]. Variants map
//! one-to-one onto HTTP status codes, so handlers and services can speak the
//! same error language without knowing about axum.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// JSON body wrapper for error responses: `{"error": {...}}`.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error details included in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Unified application error.
///
/// `details` carries structured context (offending values, reasons) that ends
/// up in the JSON response body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request payload failed validation (400).
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// Missing or invalid credentials, or a private link read by a non-owner (401).
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    /// Request origin is deny-listed (403).
    #[error("{message}")]
    Forbidden { message: String, details: Value },
    /// Resource does not exist, or is hidden from the caller by policy (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// The short code existed and has been retired (410).
    #[error("{message}")]
    Gone { message: String, details: Value },
    /// Uniqueness constraint violation (409).
    #[error("{message}")]
    Conflict { message: String, details: Value },
    /// Unexpected failure, including store connectivity problems (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn gone(message: impl Into<String>, details: Value) -> Self {
        Self::Gone {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
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

    /// Converts the error into its serializable form.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = self.parts();
        ErrorInfo {
            code,
            message,
            details,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Gone { .. } => StatusCode::GONE,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn parts(&self) -> (&'static str, String, Value) {
        match self {
            AppError::Validation { message, details } => {
                ("validation_error", message.clone(), details.clone())
            }
            AppError::Unauthorized { message, details } => {
                ("unauthorized", message.clone(), details.clone())
            }
            AppError::Forbidden { message, details } => {
                ("forbidden", message.clone(), details.clone())
            }
            AppError::NotFound { message, details } => {
                ("not_found", message.clone(), details.clone())
            }
            AppError::Gone { message, details } => ("gone", message.clone(), details.clone()),
            AppError::Conflict { message, details } => {
                ("conflict", message.clone(), details.clone())
            }
            AppError::Internal { message, details } => {
                ("internal_error", message.clone(), details.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();

        // RFC 7617: challenge clients that failed Basic authentication.
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Basic realm=\"urlcut\""),
            );
        }

        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::bad_request("bad", json!({})),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::unauthorized("unauthorized", json!({})),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::forbidden("forbidden", json!({})),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::not_found("missing", json!({})),
                StatusCode::NOT_FOUND,
            ),
            (AppError::gone("gone", json!({})), StatusCode::GONE),
            (AppError::conflict("dup", json!({})), StatusCode::CONFLICT),
            (
                AppError::internal("boom", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.status(), status);
        }
    }

    #[test]
    fn test_unauthorized_response_carries_challenge() {
        let response = AppError::unauthorized("Unauthorized", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"urlcut\""
        );
    }

    #[test]
    fn test_error_info_preserves_details() {
        let err = AppError::bad_request("Invalid visibility value", json!({ "value": "hidden" }));
        let info = err.to_error_info();

        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "Invalid visibility value");
        assert_eq!(info.details["value"], "hidden");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Short URL not found", json!({ "code": "abc" }));
        assert_eq!(err.to_string(), "Short URL not found");
    }
}
