//! API 路由模块
//!
//! # 结构
//!
//! - [`check`] - 密码校验接口
//! - [`orders`] - 订单管理接口
//! - [`health`] - 健康检查
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /check | POST | 校验 PIN |
//! | /orders | GET | 订单列表 |
//! | /orders/{id} | GET | 单个订单 |
//! | /add-order | POST | 新建订单 (201) |
//! | /update-order/{id} | PUT | 修改订单状态 |
//! | /health | GET | 健康检查 |

pub mod check;
pub mod health;
pub mod orders;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(check::router())
        .merge(orders::router())
        .merge(health::router())
}

/// Build a fully configured application with all middleware
///
/// This is used by both the HTTP server and oneshot calls in tests
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - any origin may call the API
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, so every inner layer sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
