//! Dining table API 模块
//!
//! 查询对登录用户开放 (预约选桌)；增删改仅限管理员。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::auth::require_role;
use crate::core::ServerState;
use crate::db::models::customer::{ROLE_ADMIN, ROLE_WAITRESS};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .merge(staff_routes())
}

fn staff_routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route(
            "/{id}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
        .route("/{id}/availability", patch(handler::set_availability))
        .layer(middleware::from_fn(require_role(&[ROLE_ADMIN, ROLE_WAITRESS])))
}
