//! Wishlist API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{cake_id}", post(handler::add).delete(handler::remove))
}
