use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::errors::DomainError;
use super::validation::{is_ean13, is_empty};

/// Order lifecycle. Orders start as `Received`; nothing transitions them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Received,
    InProgress,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "RECEIVED",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RECEIVED" => Ok(OrderStatus::Received),
            "IN_PROGRESS" => Ok(OrderStatus::InProgress),
            "SHIPPED" => Ok(OrderStatus::Shipped),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(DomainError::Internal(format!("unknown order status '{other}'"))),
        }
    }
}

/// A product as referenced by an incoming order request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRef {
    pub product_id: i64,
    pub product_ean: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Replaces the customer name if it changed and always bumps `updated_at`.
    pub fn rename(&mut self, customer_name: &str, now: DateTime<Utc>) {
        if self.customer_name != customer_name {
            self.customer_name = customer_name.to_string();
        }
        self.updated_at = now;
    }

    /// A header with an empty customer name is treated as not existing.
    pub fn is_live(&self) -> bool {
        !is_empty(&self.customer_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_name: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewOrder {
    pub fn received(customer_name: &str, now: DateTime<Utc>) -> Self {
        Self {
            customer_name: customer_name.to_string(),
            status: OrderStatus::Received,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One product entry of an order, denormalized with the customer name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub product_ean: String,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderLineItem {
    /// Overwrites this row with `product`'s data, keeping its identity.
    pub fn reassign(&mut self, product: ProductRef, customer_name: &str, now: DateTime<Utc>) {
        self.product_id = product.product_id;
        self.product_ean = product.product_ean;
        self.customer_name = customer_name.to_string();
        self.updated_at = now;
    }
}

/// A line item waiting for its order id, which the store assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderLineItem {
    pub product_id: i64,
    pub product_ean: String,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewOrderLineItem {
    pub fn new(product: ProductRef, customer_name: &str, now: DateTime<Utc>) -> Self {
        Self {
            product_id: product.product_id,
            product_ean: product.product_ean,
            customer_name: customer_name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// What a fetch exposes of each line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineView {
    pub order_id: i64,
    pub product_id: i64,
    pub product_ean: String,
    pub customer_name: String,
}

impl From<OrderLineItem> for OrderLineView {
    fn from(item: OrderLineItem) -> Self {
        Self {
            order_id: item.order_id,
            product_id: item.product_id,
            product_ean: item.product_ean,
            customer_name: item.customer_name,
        }
    }
}

/// Checks the rules every order write must satisfy before touching the store:
/// a customer name, at least one product, and EAN-13 shaped product codes.
pub fn validate_order_input(
    customer_name: &str,
    products: &[ProductRef],
) -> Result<(), DomainError> {
    if is_empty(customer_name) {
        return Err(DomainError::validation("empty customer name"));
    }
    if products.is_empty() {
        return Err(DomainError::validation("empty product list"));
    }
    if let Some(bad) = products.iter().find(|p| !is_ean13(&p.product_ean)) {
        return Err(DomainError::validation(format!(
            "invalid EAN: {}",
            bad.product_ean
        )));
    }
    Ok(())
}
