//! Wishlist API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::customer_rid;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{WishList, WishListDetail};
use crate::db::repository::{CakeRepository, Paginated, Pagination, WishListRepository};
use crate::utils::{ApiResponse, AppError, AppResult, ok, ok_with_message};

/// GET /api/v1/wishlists - 当前顾客的收藏 (分页)
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(page): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Paginated<WishListDetail>>>> {
    let repo = WishListRepository::new(state.db.db.clone());
    let entries = repo
        .list_by_customer(customer_rid(&user)?, &page.normalized())
        .await?;
    Ok(ok(entries))
}

/// POST /api/v1/wishlists/{cake_id} - 收藏蛋糕 (重复收藏幂等)
pub async fn add(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(cake_id): Path<String>,
) -> AppResult<Json<ApiResponse<WishList>>> {
    let cakes = CakeRepository::new(state.db.db.clone());
    let cake = cakes
        .find_by_id(&cake_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Cake {cake_id} not found")))?;
    let cake_rid = cake
        .id
        .ok_or_else(|| AppError::internal("Cake row has no id"))?;

    let repo = WishListRepository::new(state.db.db.clone());
    let entry = repo.add(customer_rid(&user)?, cake_rid).await?;
    Ok(ok_with_message(entry, "Added to wishlist"))
}

/// DELETE /api/v1/wishlists/{cake_id} - 取消收藏
pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(cake_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let cake_rid = crate::db::repository::parse_record_id("cake", &cake_id)?;
    let repo = WishListRepository::new(state.db.db.clone());
    repo.remove(customer_rid(&user)?, cake_rid).await?;
    Ok(ok_with_message((), "Removed"))
}
