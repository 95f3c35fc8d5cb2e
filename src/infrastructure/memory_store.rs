use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, NewOrderLineItem, Order, OrderLineItem};
use crate::domain::ports::OrderStore;

#[derive(Default)]
struct State {
    next_order_id: i64,
    next_item_id: i64,
    orders: HashMap<i64, Order>,
    // Keyed by line-item id so iteration follows insertion order.
    items: BTreeMap<i64, OrderLineItem>,
}

/// In-process [`OrderStore`] with the same id-assignment and ordering rules as
/// the Postgres store. Ids start at 1 and grow monotonically.
#[derive(Default)]
pub struct InMemoryOrderStore {
    state: Mutex<State>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose first order gets `first_id`.
    pub fn starting_at(first_id: i64) -> Self {
        Self {
            state: Mutex::new(State {
                next_order_id: first_id - 1,
                ..State::default()
            }),
        }
    }

    pub fn order_count(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.orders.len())
    }

    pub fn line_item_count(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.items.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, DomainError> {
        self.state
            .lock()
            .map_err(|e| DomainError::Internal(format!("store lock poisoned: {e}")))
    }
}

impl OrderStore for InMemoryOrderStore {
    fn insert_order(
        &self,
        order: NewOrder,
        items: Vec<NewOrderLineItem>,
    ) -> Result<i64, DomainError> {
        let mut state = self.lock()?;

        state.next_order_id += 1;
        let order_id = state.next_order_id;
        state.orders.insert(
            order_id,
            Order {
                id: order_id,
                customer_name: order.customer_name,
                status: order.status,
                created_at: order.created_at,
                updated_at: order.updated_at,
            },
        );

        for item in items {
            state.next_item_id += 1;
            let id = state.next_item_id;
            state.items.insert(
                id,
                OrderLineItem {
                    id,
                    order_id,
                    product_id: item.product_id,
                    product_ean: item.product_ean,
                    customer_name: item.customer_name,
                    created_at: item.created_at,
                    updated_at: item.updated_at,
                },
            );
        }

        Ok(order_id)
    }

    fn find_order(&self, id: i64) -> Result<Option<Order>, DomainError> {
        Ok(self.lock()?.orders.get(&id).cloned())
    }

    fn find_line_items(&self, order_id: i64) -> Result<Vec<OrderLineItem>, DomainError> {
        Ok(self
            .lock()?
            .items
            .values()
            .filter(|item| item.order_id == order_id)
            .cloned()
            .collect())
    }

    fn save_order(&self, order: &Order, items: &[OrderLineItem]) -> Result<(), DomainError> {
        let mut state = self.lock()?;

        if !state.orders.contains_key(&order.id) {
            return Err(DomainError::NotFound);
        }
        if let Some(missing) = items.iter().find(|i| !state.items.contains_key(&i.id)) {
            return Err(DomainError::Internal(format!(
                "line item {} does not exist",
                missing.id
            )));
        }

        state.orders.insert(order.id, order.clone());
        for item in items {
            state.items.insert(item.id, item.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::order::ProductRef;

    fn item(id: i64, ean: &str) -> NewOrderLineItem {
        NewOrderLineItem::new(
            ProductRef {
                product_id: id,
                product_ean: ean.to_string(),
            },
            "Alice",
            Utc::now(),
        )
    }

    #[test]
    fn assigns_sequential_ids() {
        let store = InMemoryOrderStore::new();
        let now = Utc::now();
        let first = store
            .insert_order(NewOrder::received("Alice", now), vec![item(1, "1234567890123")])
            .expect("insert failed");
        let second = store
            .insert_order(NewOrder::received("Bob", now), vec![item(2, "1234567890123")])
            .expect("insert failed");
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn starting_at_offsets_first_id() {
        let store = InMemoryOrderStore::starting_at(10);
        let id = store
            .insert_order(
                NewOrder::received("Alice", Utc::now()),
                vec![item(1, "1234567890123")],
            )
            .expect("insert failed");
        assert_eq!(id, 10);
    }

    #[test]
    fn line_items_are_scoped_to_their_order_and_ordered_by_id() {
        let store = InMemoryOrderStore::new();
        let now = Utc::now();
        let a = store
            .insert_order(
                NewOrder::received("Alice", now),
                vec![item(5, "1111111111111"), item(3, "2222222222222")],
            )
            .expect("insert failed");
        store
            .insert_order(NewOrder::received("Bob", now), vec![item(9, "3333333333333")])
            .expect("insert failed");

        let items = store.find_line_items(a).expect("find failed");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product_id, 5);
        assert_eq!(items[1].product_id, 3);
        assert!(items[0].id < items[1].id);
        assert!(items.iter().all(|i| i.order_id == a));
    }

    #[test]
    fn counts_report_a_poisoned_lock() {
        let store = std::sync::Arc::new(InMemoryOrderStore::new());
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.state.lock().unwrap();
            panic!("poison the store lock");
        })
        .join();

        assert!(matches!(store.order_count(), Err(DomainError::Internal(_))));
        assert!(matches!(store.line_item_count(), Err(DomainError::Internal(_))));
    }

    #[test]
    fn save_rejects_unknown_order() {
        let store = InMemoryOrderStore::new();
        let now = Utc::now();
        let order = Order {
            id: 42,
            customer_name: "Ghost".to_string(),
            status: crate::domain::order::OrderStatus::Received,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(store.save_order(&order, &[]), Err(DomainError::NotFound));
    }
}
