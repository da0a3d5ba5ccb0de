use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 状态 (healthy | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 数据库状态 (ok | unavailable)
    database: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
}

/// GET /health
///
/// 数据库不可用时仍返回 200，由 `status` 字段表达降级。
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let db_ok = state.db.is_healthy().await;

    Json(HealthResponse {
        status: if db_ok { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if db_ok { "ok" } else { "unavailable" },
        uptime_seconds: state.uptime_secs(),
    })
}
