//! Dining table API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::core::ServerState;
use crate::db::models::{AvailabilityUpdate, DiningTable, DiningTableCreate, DiningTableUpdate};
use crate::db::repository::{DiningTableRepository, Paginated, Pagination};
use crate::utils::validation::validate_payload;
use crate::utils::{ApiResponse, AppError, AppResult, ok, ok_with_message};

/// GET /api/v1/tables - 餐桌列表 (分页)
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Paginated<DiningTable>>>> {
    let repo = DiningTableRepository::new(state.db.db.clone());
    let tables = repo.find_all(&page.normalized()).await?;
    Ok(ok(tables))
}

/// GET /api/v1/tables/{id} - 餐桌详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<DiningTable>>> {
    let repo = DiningTableRepository::new(state.db.db.clone());
    let table = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {id} not found")))?;
    Ok(ok(table))
}

/// POST /api/v1/tables - 新增餐桌 (店员)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<ApiResponse<DiningTable>>> {
    validate_payload(&payload)?;
    let repo = DiningTableRepository::new(state.db.db.clone());
    let table = repo.create(payload).await?;
    Ok(ok_with_message(table, "Created"))
}

/// PUT /api/v1/tables/{id} - 更新餐桌 (店员)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<ApiResponse<DiningTable>>> {
    validate_payload(&payload)?;
    let repo = DiningTableRepository::new(state.db.db.clone());
    let table = repo.update(&id, payload).await?;
    Ok(ok(table))
}

/// PATCH /api/v1/tables/{id}/availability - 设置可用状态 (店员)
pub async fn set_availability(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AvailabilityUpdate>,
) -> AppResult<Json<ApiResponse<DiningTable>>> {
    let repo = DiningTableRepository::new(state.db.db.clone());
    let table = repo.set_availability(&id, payload.is_available).await?;
    Ok(ok(table))
}

/// DELETE /api/v1/tables/{id} - 删除餐桌 (店员)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let repo = DiningTableRepository::new(state.db.db.clone());
    repo.delete(&id).await?;
    Ok(ok_with_message((), "Deleted"))
}
