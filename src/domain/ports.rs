use std::sync::Arc;

use super::errors::DomainError;
use super::order::{NewOrder, NewOrderLineItem, Order, OrderLineItem};

/// Persistence collaborator of the order service.
///
/// Implementations commit `insert_order` and `save_order` atomically: either
/// the header and every line item are written, or nothing is.
pub trait OrderStore: Send + Sync + 'static {
    /// Inserts the header and its line items, returning the new order id.
    fn insert_order(
        &self,
        order: NewOrder,
        items: Vec<NewOrderLineItem>,
    ) -> Result<i64, DomainError>;

    fn find_order(&self, id: i64) -> Result<Option<Order>, DomainError>;

    /// Line items of `order_id`, ordered by line-item id ascending.
    fn find_line_items(&self, order_id: i64) -> Result<Vec<OrderLineItem>, DomainError>;

    /// Writes back an existing header and existing line items.
    fn save_order(&self, order: &Order, items: &[OrderLineItem]) -> Result<(), DomainError>;
}

impl<S: OrderStore + ?Sized> OrderStore for Arc<S> {
    fn insert_order(
        &self,
        order: NewOrder,
        items: Vec<NewOrderLineItem>,
    ) -> Result<i64, DomainError> {
        (**self).insert_order(order, items)
    }

    fn find_order(&self, id: i64) -> Result<Option<Order>, DomainError> {
        (**self).find_order(id)
    }

    fn find_line_items(&self, order_id: i64) -> Result<Vec<OrderLineItem>, DomainError> {
        (**self).find_line_items(order_id)
    }

    fn save_order(&self, order: &Order, items: &[OrderLineItem]) -> Result<(), DomainError> {
        (**self).save_order(order, items)
    }
}
