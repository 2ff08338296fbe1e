//! Database models
//!
//! Serde structs stored in SurrealDB plus their Create/Update DTOs.
//! Record links are `surrealdb::RecordId`; timestamps are unix millis;
//! money is `f64` (arithmetic goes through [`crate::orders::money`]).

pub mod cake;
pub mod cart;
pub mod customer;
pub mod dining_table;
pub mod inventory;
pub mod order;
pub mod payment;
pub mod reservation;
pub mod wishlist;

pub use cake::{Cake, CakeCreate, CakeId, CakeUpdate};
pub use cart::{CartAdd, CartBulkDelete, CartItem, CartItemDetail, CartItemId};
pub use customer::{
    Customer, CustomerCreate, CustomerId, CustomerUpdate, LoginRequest, LoginResponse,
    RegisterRequest, RoleUpdate,
};
pub use dining_table::{AvailabilityUpdate, DiningTable, DiningTableCreate, DiningTableUpdate};
pub use inventory::{Inventory, InventoryCreate, InventoryUpdate, StockAdjust};
pub use order::{
    FoodStatus, FoodStatusUpdate, Order, OrderCreate, OrderDetail, OrderId, OrderItem,
    OrderItemDetail, OrderStatus,
};
pub use payment::{Payment, PaymentId, PaymentStatus};
pub use reservation::{Reservation, ReservationCreate, ReservationDetail, ReservationUpdate};
pub use wishlist::{WishList, WishListDetail};
