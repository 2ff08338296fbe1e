//! Customer API 模块
//!
//! 注册和登录是公共路由；资料读写在 /api/v1 下。

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// 公共路由: 注册 + 登录
pub fn public_router() -> Router<ServerState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/me", get(handler::me).put(handler::update_me))
        .route(
            "/{id}",
            put(handler::update_by_id).delete(handler::delete_by_id),
        )
        .route("/{id}/role", put(handler::update_role))
}
