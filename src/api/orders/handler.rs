//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::api::customer_rid;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{FoodStatusUpdate, Order, OrderCreate, OrderDetail, OrderStatus};
use crate::db::repository::{Paginated, Pagination};
use crate::utils::validation::validate_payload;
use crate::utils::{ApiResponse, AppError, AppResult, ok, ok_with_message};

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// POST /api/v1/orders - 结算: 把购物车内容生成订单
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<ApiResponse<Order>>> {
    validate_payload(&payload)?;
    let order = state
        .orders
        .create_order(customer_rid(&user)?, payload)
        .await?;
    Ok(ok_with_message(order, "Order created"))
}

/// GET /api/v1/orders - 当前顾客的订单 (分页)
pub async fn list_mine(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(page): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Paginated<OrderDetail>>>> {
    let orders = state
        .orders
        .list_customer_orders(customer_rid(&user)?, &page.normalized())
        .await?;
    Ok(ok(orders))
}

/// GET /api/v1/orders/customers - 全部订单 (店员)
pub async fn list_all(
    State(state): State<ServerState>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Paginated<OrderDetail>>>> {
    let orders = state.orders.list_all_orders(&page.normalized()).await?;
    Ok(ok(orders))
}

/// GET /api/v1/orders/{id} - 订单详情 (本人或店员)
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    let order = state.orders.get_order(&id).await?;

    let owner = order
        .customer
        .id
        .as_ref()
        .map(|rid| Some(rid) == customer_rid(&user).ok().as_ref())
        .unwrap_or(false);
    if !owner && !user.is_staff() {
        return Err(AppError::forbidden("Cannot view another customer's order"));
    }
    Ok(ok(order))
}

/// PATCH /api/v1/orders/{id}/status - 更新订单状态 (店员)
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.orders.update_status(&id, payload.status).await?;
    Ok(ok(order))
}

/// PATCH /api/v1/orders/{id}/food-status - 更新出餐状态 (店员)
pub async fn update_food_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<FoodStatusUpdate>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state
        .orders
        .update_food_status(&id, payload.food_status)
        .await?;
    Ok(ok(order))
}

/// DELETE /api/v1/orders/{id} - 删除订单 (本人或管理员)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let order = state.orders.find_order(&id).await?;
    if order.customer != customer_rid(&user)? && !user.is_admin() {
        return Err(AppError::forbidden("Cannot delete another customer's order"));
    }
    state.orders.delete_order(&id).await?;
    Ok(ok_with_message((), "Deleted"))
}
