//! Check API 模块
//!
//! 单一 PIN 校验，不签发会话或令牌。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/check", post(handler::check))
}
