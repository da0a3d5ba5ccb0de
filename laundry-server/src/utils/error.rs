//! 统一错误处理
//!
//! 错误类型定义在 `shared::error`，服务端和客户端共用同一套错误码。
//! 这里只做 re-export，handler 统一从 `crate::utils` 引入。
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::order_not_found(&id))
//!
//! // 返回成功响应
//! Ok(Json(ApiResponse::message("Password is correct")))
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
