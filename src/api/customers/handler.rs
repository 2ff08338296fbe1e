//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::customer_rid;
use crate::auth::{CurrentUser, hash_password, verify_password};
use crate::core::ServerState;
use crate::db::models::{
    Customer, CustomerCreate, CustomerUpdate, LoginRequest, LoginResponse, RegisterRequest,
    RoleUpdate,
    customer::{ROLE_CUSTOMER, is_valid_role},
};
use crate::db::repository::CustomerRepository;
use crate::utils::validation::validate_payload;
use crate::utils::{ApiResponse, AppError, AppResult, now_millis, ok, ok_with_message};

/// POST /register - 注册新顾客
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    validate_payload(&payload)?;

    let repo = CustomerRepository::new(state.db.db.clone());
    let now = now_millis();
    let customer = repo
        .create(CustomerCreate {
            name: payload.name,
            email: payload.email.to_lowercase(),
            password: hash_password(&payload.password)?,
            address: payload.address,
            role: ROLE_CUSTOMER.to_string(),
            created_at: now,
            updated_at: now,
        })
        .await?;

    tracing::info!(customer = %customer.email, "Customer registered");
    Ok(ok_with_message(customer, "Registered"))
}

/// POST /login - 登录，返回 JWT
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    validate_payload(&payload)?;

    let repo = CustomerRepository::new(state.db.db.clone());
    let customer = repo
        .find_by_email(&payload.email.to_lowercase())
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(&payload.password, &customer.password)? {
        return Err(AppError::invalid_credentials());
    }

    let id = customer
        .id
        .as_ref()
        .ok_or_else(|| AppError::internal("Customer row has no id"))?
        .to_string();
    let token = state
        .jwt_service
        .generate_token(&id, &customer.email, &customer.role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    Ok(ok(LoginResponse { token }))
}

/// GET /api/v1/customers/me - 当前顾客资料
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<Customer>>> {
    let repo = CustomerRepository::new(state.db.db.clone());
    let customer = repo
        .find_by_id(&user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Customer not found"))?;
    Ok(ok(customer))
}

/// PUT /api/v1/customers/me - 更新自己的资料
pub async fn update_me(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    validate_payload(&payload)?;
    let repo = CustomerRepository::new(state.db.db.clone());
    let customer = repo.update(&user.id, payload).await?;
    Ok(ok(customer))
}

/// PUT /api/v1/customers/{id} - 更新指定顾客 (本人或管理员)
pub async fn update_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    validate_payload(&payload)?;

    let target = crate::db::repository::parse_record_id("customer", &id)?;
    if !user.is_admin() && customer_rid(&user)? != target {
        return Err(AppError::forbidden("Cannot update another customer"));
    }

    let repo = CustomerRepository::new(state.db.db.clone());
    let customer = repo.update(&id, payload).await?;
    Ok(ok(customer))
}

/// PUT /api/v1/customers/{id}/role - 调整账号角色 (仅管理员)
///
/// 员工账号就是改了角色的顾客账号；提升/收回权限都走这里。
pub async fn update_role(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<RoleUpdate>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    if !user.is_admin() {
        return Err(AppError::forbidden("Only admins can change roles"));
    }
    if !is_valid_role(&payload.role) {
        return Err(AppError::validation(format!(
            "Unknown role: {}",
            payload.role
        )));
    }

    let repo = CustomerRepository::new(state.db.db.clone());
    let customer = repo.update_role(&id, &payload.role).await?;
    tracing::info!(customer = %customer.email, role = %customer.role, "Role updated");
    Ok(ok(customer))
}

/// DELETE /api/v1/customers/{id} - 删除账号 (仅管理员)
pub async fn delete_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    if !user.is_admin() {
        return Err(AppError::forbidden("Only admins can delete accounts"));
    }

    let repo = CustomerRepository::new(state.db.db.clone());
    repo.delete(&id).await?;
    Ok(ok_with_message((), "Customer deleted"))
}
