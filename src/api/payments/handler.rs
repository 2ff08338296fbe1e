//! Payment API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::customer_rid;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::Payment;
use crate::payment::PaymentNotification;
use crate::utils::{ApiResponse, AppError, AppResult, ok, ok_with_message};

async fn check_order_access(
    state: &ServerState,
    user: &CurrentUser,
    order_id: &str,
) -> AppResult<()> {
    let order = state.orders.find_order(order_id).await?;
    if order.customer != customer_rid(user)? && !user.is_staff() {
        return Err(AppError::forbidden("Cannot access another customer's payment"));
    }
    Ok(())
}

/// POST /api/v1/payments/{order_id} - 为订单创建支付链接
///
/// 幂等: 订单已有支付记录时返回已存在的记录。
pub async fn create_payment(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(order_id): Path<String>,
) -> AppResult<Json<ApiResponse<Payment>>> {
    check_order_access(&state, &user, &order_id).await?;
    let payment = state.payments.create_payment_url(&order_id).await?;
    Ok(ok_with_message(payment, "Payment ready"))
}

/// GET /api/v1/payments/{order_id} - 查询订单的支付记录
pub async fn get_payment(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(order_id): Path<String>,
) -> AppResult<Json<ApiResponse<Payment>>> {
    check_order_access(&state, &user, &order_id).await?;
    let payment = state.payments.get_payment(&order_id).await?;
    Ok(ok(payment))
}

/// POST /payment/notification - 网关回调
pub async fn notification(
    State(state): State<ServerState>,
    Json(body): Json<PaymentNotification>,
) -> AppResult<Json<ApiResponse<Payment>>> {
    let payment = state.payments.handle_notification(body).await?;
    Ok(ok(payment))
}
