//! Inventory API 模块
//!
//! 全部路由仅限管理员。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::auth::require_role;
use crate::core::ServerState;
use crate::db::models::customer::{ROLE_ADMIN, ROLE_KITCHEN};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/low-stock", get(handler::low_stock))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/stock", put(handler::adjust_stock))
        .layer(middleware::from_fn(require_role(&[ROLE_ADMIN, ROLE_KITCHEN])))
}
