//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::customer_rid;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{CartAdd, CartBulkDelete, CartItem, CartItemDetail};
use crate::db::repository::{CakeRepository, CartRepository, Paginated, Pagination};
use crate::orders::money;
use crate::utils::{ApiResponse, AppError, AppResult, ok, ok_with_message};

/// POST /api/v1/carts - 添加到购物车
///
/// 同一蛋糕已在购物车时累加数量和小计。
pub async fn add(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CartAdd>,
) -> AppResult<Json<ApiResponse<CartItem>>> {
    if payload.quantity < 1 {
        return Err(AppError::validation("Quantity must be at least 1"));
    }

    let cakes = CakeRepository::new(state.db.db.clone());
    let cake = cakes
        .find_by_id(&payload.cake_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Cake {} not found", payload.cake_id)))?;
    let cake_rid = cake
        .id
        .clone()
        .ok_or_else(|| AppError::internal("Cake row has no id"))?;

    let line_amount = money::line_total(cake.price, payload.quantity);
    let repo = CartRepository::new(state.db.db.clone());
    let item = repo
        .upsert_add(customer_rid(&user)?, cake_rid, payload.quantity, line_amount)
        .await?;

    Ok(ok_with_message(item, "Added to cart"))
}

/// GET /api/v1/carts/customer - 当前顾客的购物车 (分页)
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(page): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Paginated<CartItemDetail>>>> {
    let repo = CartRepository::new(state.db.db.clone());
    let items = repo
        .list_by_customer(customer_rid(&user)?, &page.normalized())
        .await?;
    Ok(ok(items))
}

/// GET /api/v1/carts/{id} - 购物车单行详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<CartItemDetail>>> {
    let repo = CartRepository::new(state.db.db.clone());
    let item = repo
        .find_by_id(customer_rid(&user)?, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Cart item {id} not found")))?;
    Ok(ok(item))
}

/// DELETE /api/v1/carts/{id} - 减少一件；数量为 1 时删除整行
pub async fn remove_item(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let repo = CartRepository::new(state.db.db.clone());
    repo.remove_item(customer_rid(&user)?, &id).await?;
    Ok(ok_with_message((), "Removed"))
}

/// DELETE /api/v1/carts - 清空购物车
pub async fn clear(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<()>>> {
    let repo = CartRepository::new(state.db.db.clone());
    let removed = repo.clear(customer_rid(&user)?).await?;
    Ok(ok_with_message((), format!("Removed {removed} items")))
}

/// POST /api/v1/carts/bulk - 删除选中的购物车行
pub async fn bulk_delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CartBulkDelete>,
) -> AppResult<Json<ApiResponse<()>>> {
    if payload.cart_ids.is_empty() {
        return Err(AppError::validation("cart_ids must not be empty"));
    }
    let repo = CartRepository::new(state.db.db.clone());
    let removed = repo
        .bulk_delete(customer_rid(&user)?, &payload.cart_ids)
        .await?;
    Ok(ok_with_message((), format!("Removed {removed} items")))
}
