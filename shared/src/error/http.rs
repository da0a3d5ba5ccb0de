//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::OrderNotFound | Self::CredentialNotFound => {
                StatusCode::NOT_FOUND
            }

            // 401 Unauthorized
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::CredentialCorrupted => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation errors)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::InvalidOrderStatus => StatusCode::BAD_REQUEST,
        }
    }
}
