//! Status transition rules
//!
//! Both lifecycles are enforced here, not in handlers: every status
//! write goes through [`check_order_transition`] or
//! [`check_food_transition`].

use crate::db::models::{FoodStatus, OrderStatus};
use crate::utils::{AppError, AppResult};

/// Order lifecycle: pending → paid → preparing → delivered, with
/// cancellation allowed any time before delivery.
pub fn order_transition_allowed(from: OrderStatus, to: OrderStatus) -> bool {
    use OrderStatus::*;
    match (from, to) {
        (Pending, Paid) => true,
        (Paid, Preparing) => true,
        (Preparing, Delivered) => true,
        (Pending | Paid | Preparing, Cancelled) => true,
        _ => false,
    }
}

/// Kitchen lifecycle: pending → cooking → ready → delivered;
/// cancellation is allowed from any state.
pub fn food_transition_allowed(from: FoodStatus, to: FoodStatus) -> bool {
    use FoodStatus::*;
    match (from, to) {
        (Pending, Cooking) => true,
        (Cooking, Ready) => true,
        (Ready, Delivered) => true,
        (_, Cancelled) => true,
        _ => false,
    }
}

pub fn check_order_transition(from: OrderStatus, to: OrderStatus) -> AppResult<()> {
    if order_transition_allowed(from, to) {
        Ok(())
    } else {
        Err(AppError::invalid_transition(format!(
            "Cannot move order from {from} to {to}"
        )))
    }
}

pub fn check_food_transition(from: FoodStatus, to: FoodStatus) -> AppResult<()> {
    if food_transition_allowed(from, to) {
        Ok(())
    } else {
        Err(AppError::invalid_transition(format!(
            "Cannot move food status from {from} to {to}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{FoodStatus::*, OrderStatus};

    #[test]
    fn order_happy_path() {
        use OrderStatus::*;
        assert!(order_transition_allowed(Pending, Paid));
        assert!(order_transition_allowed(Paid, Preparing));
        assert!(order_transition_allowed(Preparing, Delivered));
    }

    #[test]
    fn order_cancel_only_before_delivery() {
        use OrderStatus::*;
        assert!(order_transition_allowed(Pending, Cancelled));
        assert!(order_transition_allowed(Preparing, Cancelled));
        assert!(!order_transition_allowed(Delivered, Cancelled));
        assert!(!order_transition_allowed(Cancelled, Pending));
    }

    #[test]
    fn order_no_skipping() {
        use OrderStatus::*;
        assert!(!order_transition_allowed(Pending, Preparing));
        assert!(!order_transition_allowed(Pending, Delivered));
        assert!(!order_transition_allowed(Paid, Delivered));
    }

    #[test]
    fn food_happy_path_and_rejections() {
        assert!(food_transition_allowed(Pending, Cooking));
        assert!(food_transition_allowed(Cooking, Ready));
        assert!(food_transition_allowed(Ready, Delivered));
        assert!(!food_transition_allowed(Pending, Ready));
        assert!(!food_transition_allowed(Delivered, Cooking));
        assert!(!food_transition_allowed(Cancelled, Cooking));
    }

    #[test]
    fn food_cancel_from_any_state() {
        assert!(food_transition_allowed(Pending, Cancelled));
        assert!(food_transition_allowed(Ready, Cancelled));
        assert!(food_transition_allowed(Delivered, Cancelled));
    }

    #[test]
    fn check_reports_invalid_transition() {
        assert!(check_food_transition(Pending, Ready).is_err());
        assert!(check_food_transition(Pending, Cooking).is_ok());
    }
}
