//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::customer_rid;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Reservation, ReservationCreate, ReservationDetail, ReservationUpdate};
use crate::db::repository::{
    DiningTableRepository, Paginated, Pagination, ReservationRepository, parse_record_id,
};
use crate::utils::validation::validate_payload;
use crate::utils::{ApiResponse, AppError, AppResult, ok, ok_with_message};

/// POST /api/v1/reservations - 预约餐桌
///
/// 餐桌必须存在且当前可用。
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    validate_payload(&payload)?;

    let tables = DiningTableRepository::new(state.db.db.clone());
    let table = tables
        .find_by_id(&payload.table_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", payload.table_id)))?;
    table.check_booking(payload.guest_count)?;
    let table_rid = table
        .id
        .ok_or_else(|| AppError::internal("Table row has no id"))?;

    let repo = ReservationRepository::new(state.db.db.clone());
    let reservation = repo
        .create(
            customer_rid(&user)?,
            table_rid,
            payload.reserved_at,
            payload.guest_count,
            payload.note,
        )
        .await?;
    Ok(ok_with_message(reservation, "Reserved"))
}

/// GET /api/v1/reservations - 当前顾客的预约 (分页)
pub async fn list_mine(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(page): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Paginated<ReservationDetail>>>> {
    let repo = ReservationRepository::new(state.db.db.clone());
    let reservations = repo
        .list_by_customer(customer_rid(&user)?, &page.normalized())
        .await?;
    Ok(ok(reservations))
}

/// GET /api/v1/reservations/all - 全部预约 (店员)
pub async fn list_all(
    State(state): State<ServerState>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Paginated<ReservationDetail>>>> {
    let repo = ReservationRepository::new(state.db.db.clone());
    let reservations = repo.list_all(&page.normalized()).await?;
    Ok(ok(reservations))
}

async fn load_owned(
    state: &ServerState,
    user: &CurrentUser,
    id: &str,
) -> AppResult<Reservation> {
    let repo = ReservationRepository::new(state.db.db.clone());
    let reservation = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))?;
    if reservation.customer != customer_rid(user)? && !user.is_staff() {
        return Err(AppError::forbidden("Cannot access another customer's reservation"));
    }
    Ok(reservation)
}

/// GET /api/v1/reservations/{id} - 预约详情 (本人或店员)
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<ReservationDetail>>> {
    load_owned(&state, &user, &id).await?;
    let repo = ReservationRepository::new(state.db.db.clone());
    let detail = repo
        .find_detail_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))?;
    Ok(ok(detail))
}

/// PUT /api/v1/reservations/{id} - 修改预约 (本人或店员)
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    validate_payload(&payload)?;
    let current = load_owned(&state, &user, &id).await?;

    let table_rid = match &payload.table_id {
        Some(table_id) => {
            let tables = DiningTableRepository::new(state.db.db.clone());
            let table = tables
                .find_by_id(table_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Table {table_id} not found")))?;
            table.check_booking(payload.guest_count.unwrap_or(current.guest_count))?;
            Some(parse_record_id("dining_table", table_id)?)
        }
        None => None,
    };

    let repo = ReservationRepository::new(state.db.db.clone());
    let reservation = repo.update(&id, table_rid, payload).await?;
    Ok(ok(reservation))
}

/// DELETE /api/v1/reservations/{id} - 取消预约 (本人或店员)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    load_owned(&state, &user, &id).await?;
    let repo = ReservationRepository::new(state.db.db.clone());
    repo.delete(&id).await?;
    Ok(ok_with_message((), "Cancelled"))
}
