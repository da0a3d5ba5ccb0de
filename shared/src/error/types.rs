//! Error types and API response structures

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the ledger, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
///
/// System errors (9xxx) keep their real cause in `message` for logging only;
/// the HTTP body always carries [`ErrorCode::message`] instead.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Whether this error is a server-side failure whose cause must stay private
    pub fn is_system(&self) -> bool {
        matches!(self.code.category(), ErrorCategory::System)
    }

    // ==================== Convenience constructors ====================

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an order not found error
    pub fn order_not_found(id: impl Into<String>) -> Self {
        Self::new(ErrorCode::OrderNotFound).with_detail("id", id.into())
    }

    /// Create an invalid order status error
    pub fn invalid_status(value: impl Into<String>) -> Self {
        let v = value.into();
        Self::with_message(
            ErrorCode::InvalidOrderStatus,
            format!("Invalid status '{}', expected one of Given, Received, Paid", v),
        )
        .with_detail("status", v)
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// Create a credential not found error
    pub fn credential_not_found() -> Self {
        Self::new(ErrorCode::CredentialNotFound)
    }

    /// Create a corrupted credential error (cause is logged, never returned)
    pub fn credential_corrupted(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::CredentialCorrupted, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create a value out of range error
    pub fn out_of_range(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValueOutOfRange, msg).with_detail("field", field.into())
    }
}

/// Unified API response structure
///
/// Provides a consistent response format for message-style endpoints and errors:
/// - `code`: Error code (0 for success)
/// - `message`: Human-readable message
/// - `data`: Response payload (on success)
/// - `details`: Additional error details (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 for success, non-zero for errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse<()> {
    /// Create a success response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            message: message.into(),
            data: None,
            details: None,
        }
    }

    /// Create an error response from an AppError
    ///
    /// System errors are reduced to the generic message of their code.
    pub fn error(err: &AppError) -> Self {
        if err.is_system() {
            return Self {
                code: Some(err.code.code()),
                message: err.code.message().to_string(),
                data: None,
                details: None,
            };
        }
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);

        if self.is_system() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        } else {
            tracing::debug!(
                code = %self.code,
                message = %self.message,
                "Request rejected"
            );
        }

        (status, Json(body)).into_response()
    }
}
