//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::core::ServerState;
use crate::db::models::{Cake, CakeCreate, CakeUpdate};
use crate::db::repository::{CakeRepository, Paginated, Pagination};
use crate::utils::validation::validate_payload;
use crate::utils::{ApiResponse, AppError, AppResult, ok, ok_with_message};

/// GET /menus - 菜单列表 (分页)
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Paginated<Cake>>>> {
    let repo = CakeRepository::new(state.db.db.clone());
    let cakes = repo.find_all(&page.normalized()).await?;
    Ok(ok(cakes))
}

/// GET /menus/{id} - 菜单详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Cake>>> {
    let repo = CakeRepository::new(state.db.db.clone());
    let cake = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Cake {id} not found")))?;
    Ok(ok(cake))
}

/// POST /api/v1/menus - 新增菜单项 (管理员)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CakeCreate>,
) -> AppResult<Json<ApiResponse<Cake>>> {
    validate_payload(&payload)?;
    let repo = CakeRepository::new(state.db.db.clone());
    let cake = repo.create(payload).await?;
    tracing::info!(cake = %cake.title, "Cake created");
    Ok(ok_with_message(cake, "Created"))
}

/// PUT /api/v1/menus/{id} - 更新菜单项 (管理员)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CakeUpdate>,
) -> AppResult<Json<ApiResponse<Cake>>> {
    validate_payload(&payload)?;
    let repo = CakeRepository::new(state.db.db.clone());
    let cake = repo.update(&id, payload).await?;
    Ok(ok(cake))
}

/// DELETE /api/v1/menus/{id} - 软删除菜单项 (管理员)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let repo = CakeRepository::new(state.db.db.clone());
    repo.soft_delete(&id).await?;
    Ok(ok_with_message((), "Deleted"))
}
