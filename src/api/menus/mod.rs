//! Menu (cake) API 模块
//!
//! 浏览是公共路由；增删改需要管理员。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_role;
use crate::core::ServerState;
use crate::db::models::customer::ROLE_ADMIN;

/// 公共路由: 菜单浏览
pub fn public_router() -> Router<ServerState> {
    Router::new()
        .route("/menus", get(handler::list))
        .route("/menus/{id}", get(handler::get_by_id))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route(
            "/{id}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
        .layer(middleware::from_fn(require_role(&[ROLE_ADMIN])))
}
