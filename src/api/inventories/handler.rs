//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::core::ServerState;
use crate::db::models::{Inventory, InventoryCreate, InventoryUpdate, StockAdjust};
use crate::db::repository::{InventoryRepository, Paginated, Pagination};
use crate::utils::validation::validate_payload;
use crate::utils::{ApiResponse, AppError, AppResult, ok, ok_with_message};

/// POST /api/v1/inventories - 新增库存项
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryCreate>,
) -> AppResult<Json<ApiResponse<Inventory>>> {
    validate_payload(&payload)?;
    let repo = InventoryRepository::new(state.db.db.clone());
    let item = repo.create(payload).await?;
    Ok(ok_with_message(item, "Created"))
}

/// GET /api/v1/inventories - 库存列表 (分页)
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Paginated<Inventory>>>> {
    let repo = InventoryRepository::new(state.db.db.clone());
    let items = repo.find_all(&page.normalized()).await?;
    Ok(ok(items))
}

/// GET /api/v1/inventories/low-stock - 低于阈值的库存
pub async fn low_stock(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<Inventory>>>> {
    let repo = InventoryRepository::new(state.db.db.clone());
    let items = repo.find_low_stock().await?;
    Ok(ok(items))
}

/// GET /api/v1/inventories/{id} - 库存详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Inventory>>> {
    let repo = InventoryRepository::new(state.db.db.clone());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Inventory item {id} not found")))?;
    Ok(ok(item))
}

/// PUT /api/v1/inventories/{id} - 更新库存项
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InventoryUpdate>,
) -> AppResult<Json<ApiResponse<Inventory>>> {
    validate_payload(&payload)?;
    let repo = InventoryRepository::new(state.db.db.clone());
    let item = repo.update(&id, payload).await?;
    Ok(ok(item))
}

/// PUT /api/v1/inventories/{id}/stock - 相对调整库存数量
pub async fn adjust_stock(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StockAdjust>,
) -> AppResult<Json<ApiResponse<Inventory>>> {
    let repo = InventoryRepository::new(state.db.db.clone());
    let item = repo.adjust_stock(&id, payload.change).await?;
    Ok(ok(item))
}

/// DELETE /api/v1/inventories/{id} - 删除库存项
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let repo = InventoryRepository::new(state.db.db.clone());
    repo.delete(&id).await?;
    Ok(ok_with_message((), "Deleted"))
}
