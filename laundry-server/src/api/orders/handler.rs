//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::repository::RepoError;
use crate::utils::validation::{validate_order_create, validate_status};
use crate::utils::{AppError, AppJson, AppResult};
use shared::models::{Order, OrderCreate, OrderStatusUpdate};

/// GET /orders - 获取所有订单 (按创建时间升序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders.find_all().await?;
    Ok(Json(orders))
}

/// GET /orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::order_not_found(&id))?;
    Ok(Json(order))
}

/// POST /add-order - 创建订单
///
/// 校验全部通过后才写库，返回 201 和新记录。
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let data = validate_order_create(&payload)?;

    let order = state.orders.create(data).await?;
    tracing::info!(order_id = %order.id, status = %order.status, "Order created");

    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /update-order/:id - 修改订单状态
///
/// 只改 status，其他字段保持不变；id 不存在时返回 404，不会新建记录。
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let status = validate_status(&payload.status)?;

    let order = state
        .orders
        .update_status(&id, status)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(id) => AppError::order_not_found(id),
            other => other.into(),
        })?;
    tracing::info!(order_id = %order.id, status = %order.status, "Order status updated");

    Ok(Json(order))
}
