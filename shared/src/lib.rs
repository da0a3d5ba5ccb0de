//! Shared types for the laundry ledger
//!
//! Common types used across crates: the unified error system and the
//! request/response models of the order and credential endpoints.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
