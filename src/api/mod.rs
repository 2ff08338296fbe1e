//! API 模块
//!
//! 每个资源一个子模块: `mod.rs` 定义路由，`handler.rs` 实现处理函数。
//!
//! # 路由总览
//!
//! 公共路由 (无需认证):
//!
//! | 方法 | 路径 | 说明 |
//! |------|------|------|
//! | POST | /register | 注册 |
//! | POST | /login | 登录 |
//! | GET | /menus | 菜单列表 |
//! | GET | /menus/{id} | 菜单详情 |
//! | POST | /payment/notification | 支付网关回调 |
//! | GET | /health | 健康检查 |
//!
//! 受保护路由挂载在 `/api/v1` 下，需要 `Authorization: Bearer <token>`。

pub mod carts;
pub mod customers;
pub mod health;
pub mod inventories;
pub mod menus;
pub mod orders;
pub mod payments;
pub mod reservations;
pub mod tables;
pub mod wishlists;

use axum::Router;
use surrealdb::RecordId;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::parse_record_id;
use crate::utils::{AppError, AppResult};

/// 无需认证的路由
pub fn public_routes() -> Router<ServerState> {
    Router::new()
        .merge(customers::public_router())
        .merge(menus::public_router())
        .merge(payments::public_router())
        .merge(health::router())
}

/// `/api/v1` 下的受保护路由
pub fn protected_routes() -> Router<ServerState> {
    Router::new()
        .nest("/customers", customers::router())
        .nest("/menus", menus::router())
        .nest("/carts", carts::router())
        .nest("/orders", orders::router())
        .nest("/payments", payments::router())
        .nest("/wishlists", wishlists::router())
        .nest("/inventories", inventories::router())
        .nest("/tables", tables::router())
        .nest("/reservations", reservations::router())
}

/// 当前用户的 customer 记录 ID
pub(crate) fn customer_rid(user: &CurrentUser) -> AppResult<RecordId> {
    parse_record_id("customer", &user.id).map_err(AppError::from)
}
