use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordergate_core::{OrderId, UserId};

/// Fulfillment status of an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }
}

/// A stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub product_name: String,
    pub price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an order; the store allocates the id.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub product_name: String,
    pub price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub status: Option<OrderStatus>,
}

/// In-memory order table keyed by order id.
///
/// Freshly allocated ids start above the demo fixture range.
#[derive(Debug)]
pub struct InMemoryOrderStore {
    inner: RwLock<HashMap<OrderId, OrderRecord>>,
    next_id: AtomicU64,
}

const FIRST_ALLOCATED_ID: u64 = 3001;

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(FIRST_ALLOCATED_ID),
        }
    }

    /// Build a store pre-populated with fixed-id records.
    pub fn seeded(records: impl IntoIterator<Item = OrderRecord>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.inner.write() {
            for record in records {
                map.insert(record.order_id, record);
            }
        }
        store
    }

    pub fn get(&self, order_id: &OrderId) -> Option<OrderRecord> {
        let map = self.inner.read().ok()?;
        map.get(order_id).cloned()
    }

    /// All orders, ordered by id.
    pub fn list(&self) -> Vec<OrderRecord> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut records: Vec<OrderRecord> = map.values().cloned().collect();
        records.sort_by_key(|r| r.order_id);
        records
    }

    /// Orders owned by `owner`, ordered by id.
    pub fn list_by_owner(&self, owner: &UserId) -> Vec<OrderRecord> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut records: Vec<OrderRecord> = map
            .values()
            .filter(|r| r.user_id == *owner)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.order_id);
        records
    }

    /// Insert a new order under the next free id.
    pub fn insert(&self, new: NewOrder) -> OrderRecord {
        let order_id = OrderId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let record = OrderRecord {
            order_id,
            user_id: new.user_id,
            product_name: new.product_name,
            price: new.price,
            status: new.status,
            created_at: new.created_at,
        };

        if let Ok(mut map) = self.inner.write() {
            map.insert(order_id, record.clone());
        }
        record
    }

    /// Apply a partial update; returns the updated record, or `None` if the
    /// order does not exist.
    pub fn update(&self, order_id: &OrderId, patch: OrderPatch) -> Option<OrderRecord> {
        let mut map = self.inner.write().ok()?;
        let record = map.get_mut(order_id)?;

        if let Some(product_name) = patch.product_name {
            record.product_name = product_name;
        }
        if let Some(price) = patch.price {
            record.price = price;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }

        Some(record.clone())
    }

    /// Delete an order; returns whether it existed.
    pub fn delete(&self, order_id: &OrderId) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(order_id).is_some(),
            Err(_) => false,
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, owner: &str) -> OrderRecord {
        OrderRecord {
            order_id: OrderId::new(id),
            user_id: UserId::new(owner),
            product_name: format!("Widget {}", id),
            price: 9.99,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn insert_allocates_ids_above_the_seed_range() {
        let store = InMemoryOrderStore::seeded([record(1001, "user_a")]);

        let created = store.insert(NewOrder {
            user_id: UserId::new("user_a"),
            product_name: "Widget".to_string(),
            price: 1.0,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        });

        assert_eq!(created.order_id.as_u64(), 3001);
        assert!(store.get(&created.order_id).is_some());
    }

    #[test]
    fn list_by_owner_returns_only_that_owners_orders() {
        let store = InMemoryOrderStore::seeded([
            record(1001, "user_a"),
            record(1002, "user_a"),
            record(2001, "user_b"),
        ]);

        let owned = store.list_by_owner(&UserId::new("user_a"));
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|r| r.user_id == UserId::new("user_a")));

        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn update_touches_only_provided_fields() {
        let store = InMemoryOrderStore::seeded([record(1001, "user_a")]);

        let updated = store
            .update(
                &OrderId::new(1001),
                OrderPatch {
                    status: Some(OrderStatus::Delivered),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Delivered);
        assert_eq!(updated.product_name, "Widget 1001");
    }

    #[test]
    fn update_and_delete_miss_absent_orders() {
        let store = InMemoryOrderStore::new();
        assert!(store.update(&OrderId::new(42), OrderPatch::default()).is_none());
        assert!(!store.delete(&OrderId::new(42)));
    }

    #[test]
    fn delete_removes_the_record() {
        let store = InMemoryOrderStore::seeded([record(1001, "user_a")]);
        assert!(store.delete(&OrderId::new(1001)));
        assert!(store.get(&OrderId::new(1001)).is_none());
    }
}
