//! In-memory order collection. Newest orders sit at the front; the only
//! mutation after insertion is the single active → completed transition.

use chrono::{DateTime, Local};
use tracing::warn;

use crate::types::{Order, OrderStatus};

#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the book from a persisted collection, preserving its order.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Insert at the front so iteration is newest-first.
    pub fn add(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    pub fn find(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Mark an order completed, stamping `completed_at` with `now`.
    ///
    /// Returns true when the order actually changed, so the caller knows
    /// to persist. Completing an already-completed order is a no-op that
    /// keeps the first completion instant; an unknown id is logged and
    /// ignored, since the navigation contract should make it unreachable.
    pub fn complete(&mut self, id: &str, now: DateTime<Local>) -> bool {
        match self.orders.iter_mut().find(|o| o.id == id) {
            Some(order) if order.status == OrderStatus::Active => {
                order.status = OrderStatus::Completed;
                order.completed_at = Some(now);
                true
            }
            Some(_) => false,
            None => {
                warn!(%id, "complete requested for unknown order");
                false
            }
        }
    }

    /// Borrowing view of the orders with the given status, in collection
    /// order (newest first).
    pub fn by_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |o| o.status == status)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    pub fn as_slice(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
