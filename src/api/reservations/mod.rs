//! Reservation API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_role;
use crate::core::ServerState;
use crate::db::models::customer::{ROLE_ADMIN, ROLE_WAITRESS};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::list_mine))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .merge(staff_routes())
}

fn staff_routes() -> Router<ServerState> {
    Router::new()
        .route("/all", get(handler::list_all))
        .layer(middleware::from_fn(require_role(&[ROLE_ADMIN, ROLE_WAITRESS])))
}
