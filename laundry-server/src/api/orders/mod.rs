//! Order API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/orders", get(handler::list))
        .route("/orders/{id}", get(handler::get_by_id))
        .route("/add-order", post(handler::create))
        .route("/update-order/{id}", put(handler::update_status))
}
