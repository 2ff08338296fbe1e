//! Payment API 模块
//!
//! 回调是公共路由 (网关无法携带用户令牌)；其余在 /api/v1 下。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// 公共路由: 网关回调
pub fn public_router() -> Router<ServerState> {
    Router::new().route("/payment/notification", post(handler::notification))
}

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/{order_id}",
        post(handler::create_payment).get(handler::get_payment),
    )
}
