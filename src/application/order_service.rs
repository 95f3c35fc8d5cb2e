use std::sync::Arc;

use chrono::Utc;

use crate::domain::errors::DomainError;
use crate::domain::order::{
    validate_order_input, NewOrder, NewOrderLineItem, OrderLineView, ProductRef,
};
use crate::domain::ports::OrderStore;
use crate::domain::validation::parse_numeric;

/// Service type shared by the HTTP handlers.
pub type DynOrderService = OrderService<Arc<dyn OrderStore>>;

pub struct OrderService<S> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates an order with one line item per product, in input order.
    ///
    /// All input is validated before anything is written, and the header and
    /// its line items are committed together.
    pub fn create_order(
        &self,
        customer_name: &str,
        products: Vec<ProductRef>,
    ) -> Result<i64, DomainError> {
        validate_order_input(customer_name, &products).inspect_err(|e| {
            log::warn!("Rejected new order: {}", e);
        })?;

        let now = Utc::now();
        let items = products
            .into_iter()
            .map(|p| NewOrderLineItem::new(p, customer_name, now))
            .collect::<Vec<_>>();
        let item_count = items.len();

        let order_id = self
            .store
            .insert_order(NewOrder::received(customer_name, now), items)?;

        log::info!(
            "Created order {} with {} line item(s)",
            order_id,
            item_count
        );
        Ok(order_id)
    }

    /// Returns the line items of an order. The order header is not read.
    pub fn fetch_order(&self, id: &str) -> Result<Vec<OrderLineView>, DomainError> {
        let order_id = parse_order_id(id)?;
        log::info!("Fetching order details for order ID {}", order_id);

        let items = self.store.find_line_items(order_id)?;
        if items.is_empty() {
            return Err(DomainError::NotFound);
        }

        Ok(items.into_iter().map(OrderLineView::from).collect())
    }

    /// Edits an existing order in place.
    ///
    /// The product list must have exactly as many entries as the order has
    /// line items. Entries are matched by position: the Nth stored line item
    /// takes the Nth product's data, whatever its product id was before.
    pub fn update_order(
        &self,
        id: &str,
        customer_name: &str,
        products: Vec<ProductRef>,
    ) -> Result<i64, DomainError> {
        let order_id = parse_order_id(id)?;
        validate_order_input(customer_name, &products).inspect_err(|e| {
            log::warn!("Rejected update of order {}: {}", order_id, e);
        })?;
        log::info!("Updating order details for order ID {}", order_id);

        let mut order = self
            .store
            .find_order(order_id)?
            .filter(|o| o.is_live())
            .ok_or(DomainError::NotFound)?;

        let mut items = self.store.find_line_items(order_id)?;
        if items.is_empty() {
            return Err(DomainError::NotFound);
        }
        if items.len() != products.len() {
            log::warn!(
                "Rejected update of order {}: has {} line item(s), got {} product(s)",
                order_id,
                items.len(),
                products.len()
            );
            return Err(DomainError::validation("count mismatch"));
        }

        let now = Utc::now();
        order.rename(customer_name, now);
        for (item, product) in items.iter_mut().zip(products) {
            item.reassign(product, customer_name, now);
        }

        self.store.save_order(&order, &items)?;
        Ok(order.id)
    }
}

fn parse_order_id(id: &str) -> Result<i64, DomainError> {
    parse_numeric(id).ok_or_else(|| DomainError::validation("not a number"))
}
