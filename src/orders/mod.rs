//! Order Service
//!
//! Assembles orders from cart contents and owns both status lifecycles.

pub mod money;
pub mod status;

use surrealdb::RecordId;

use crate::db::DbService;
use crate::db::models::{
    FoodStatus, Order, OrderCreate, OrderDetail, OrderStatus, PaymentStatus,
};
use crate::db::repository::order::NewOrderItem;
use crate::db::repository::{CartRepository, OrderRepository, Paginated, Pagination};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    carts: CartRepository,
}

impl OrderService {
    pub fn new(db: &DbService) -> Self {
        Self {
            orders: OrderRepository::new(db.db.clone()),
            carts: CartRepository::new(db.db.clone()),
        }
    }

    /// Checkout: snapshot the cart into an order, then clear the cart.
    ///
    /// The order and its items are written in one transaction; the cart
    /// is cleared only after that commit, so a failed checkout leaves
    /// the cart untouched.
    pub async fn create_order(
        &self,
        customer: RecordId,
        data: OrderCreate,
    ) -> AppResult<Order> {
        let cart_items = self.carts.list_all_by_customer(customer.clone()).await?;
        if cart_items.is_empty() {
            return Err(AppError::validation("Cart is empty"));
        }

        let total_price = money::sum(cart_items.iter().map(|c| c.subtotal));
        let items: Vec<NewOrderItem> = cart_items
            .iter()
            .map(|c| NewOrderItem {
                cake: c.cake.clone(),
                quantity: c.quantity,
                price: money::unit_price(c.subtotal, c.quantity),
                subtotal: c.subtotal,
            })
            .collect();

        let order = self
            .orders
            .create_with_items(customer.clone(), total_price, data.delivery_address, items)
            .await?;

        self.carts.clear(customer).await?;

        tracing::info!(
            order = %order.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            total = total_price,
            "Order created"
        );
        Ok(order)
    }

    pub async fn get_order(&self, id: &str) -> AppResult<OrderDetail> {
        self.orders
            .get_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))
    }

    pub async fn find_order(&self, id: &str) -> AppResult<Order> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))
    }

    pub async fn list_customer_orders(
        &self,
        customer: RecordId,
        page: &Pagination,
    ) -> AppResult<Paginated<OrderDetail>> {
        Ok(self.orders.list_by_customer(customer, page).await?)
    }

    pub async fn list_all_orders(&self, page: &Pagination) -> AppResult<Paginated<OrderDetail>> {
        Ok(self.orders.list_all(page).await?)
    }

    /// Payment-side status change, validated against the lifecycle
    pub async fn update_status(&self, id: &str, to: OrderStatus) -> AppResult<Order> {
        let order = self.find_order(id).await?;
        status::check_order_transition(order.status, to)?;
        Ok(self.orders.update_status(id, to).await?)
    }

    /// Kitchen-side status change, validated against the lifecycle
    pub async fn update_food_status(&self, id: &str, to: FoodStatus) -> AppResult<Order> {
        let order = self.find_order(id).await?;
        status::check_food_transition(order.food_status, to)?;
        Ok(self.orders.update_food_status(id, to).await?)
    }

    /// Reflect a payment outcome onto the order status.
    ///
    /// Transitions the lifecycle forbids (e.g. a late "failed" after the
    /// order was already delivered) are logged and skipped, not errors:
    /// the notification itself was still handled.
    pub async fn sync_from_payment(
        &self,
        order_id: &str,
        payment_status: PaymentStatus,
    ) -> AppResult<()> {
        let target = match payment_status {
            PaymentStatus::Settled => OrderStatus::Paid,
            PaymentStatus::Failed | PaymentStatus::Cancelled => OrderStatus::Cancelled,
            PaymentStatus::Pending => return Ok(()),
        };

        let order = self.find_order(order_id).await?;
        if order.status == target {
            return Ok(());
        }
        if !status::order_transition_allowed(order.status, target) {
            tracing::warn!(
                order = order_id,
                from = %order.status,
                to = %target,
                "Skipping payment-driven status change the lifecycle forbids"
            );
            return Ok(());
        }
        self.orders.update_status(order_id, target).await?;
        Ok(())
    }

    pub async fn delete_order(&self, id: &str) -> AppResult<()> {
        Ok(self.orders.delete(id).await?)
    }
}
