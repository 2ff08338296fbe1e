//! Cart API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::add).delete(handler::clear))
        .route("/customer", get(handler::list))
        .route("/bulk", post(handler::bulk_delete))
        .route("/{id}", get(handler::get_by_id).delete(handler::remove_item))
}
