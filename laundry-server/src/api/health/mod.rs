//! 健康检查路由
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "database": "ok",
//!   "uptime_seconds": 42
//! }
//! ```

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(handler::health))
}
