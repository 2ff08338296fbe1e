//! Order API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::auth::require_role;
use crate::core::ServerState;
use crate::db::models::customer::{ROLE_ADMIN, ROLE_KITCHEN};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::list_mine))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .merge(staff_routes())
}

fn staff_routes() -> Router<ServerState> {
    Router::new()
        .route("/customers", get(handler::list_all))
        .route("/{id}/status", patch(handler::update_status))
        .route("/{id}/food-status", patch(handler::update_food_status))
        .layer(middleware::from_fn(require_role(&[ROLE_ADMIN, ROLE_KITCHEN])))
}
