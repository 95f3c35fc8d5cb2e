use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, NewOrderLineItem, Order, OrderLineItem};
use crate::schema::{order_line_items, orders};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, AsChangeset)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i64,
    pub customer_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub customer_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, AsChangeset)]
#[diesel(table_name = order_line_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderLineItemRow {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub product_ean: String,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_line_items)]
pub struct NewOrderLineItemRow {
    pub order_id: i64,
    pub product_id: i64,
    pub product_ean: String,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Row <-> domain conversions ───────────────────────────────────────────────

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Order {
            id: row.id,
            customer_name: row.customer_name,
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        OrderRow {
            id: order.id,
            customer_name: order.customer_name.clone(),
            status: order.status.as_str().to_string(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

impl From<NewOrder> for NewOrderRow {
    fn from(order: NewOrder) -> Self {
        NewOrderRow {
            customer_name: order.customer_name,
            status: order.status.as_str().to_string(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

impl From<OrderLineItemRow> for OrderLineItem {
    fn from(row: OrderLineItemRow) -> Self {
        OrderLineItem {
            id: row.id,
            order_id: row.order_id,
            product_id: row.product_id,
            product_ean: row.product_ean,
            customer_name: row.customer_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<&OrderLineItem> for OrderLineItemRow {
    fn from(item: &OrderLineItem) -> Self {
        OrderLineItemRow {
            id: item.id,
            order_id: item.order_id,
            product_id: item.product_id,
            product_ean: item.product_ean.clone(),
            customer_name: item.customer_name.clone(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl NewOrderLineItemRow {
    pub fn for_order(order_id: i64, item: NewOrderLineItem) -> Self {
        NewOrderLineItemRow {
            order_id,
            product_id: item.product_id,
            product_ean: item.product_ean,
            customer_name: item.customer_name,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
