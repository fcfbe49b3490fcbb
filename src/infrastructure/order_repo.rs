use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{total_price, Order, OrderDraft, OrderStatus};
use crate::domain::ports::OrderRepository;

/// Order store keyed by generated order id.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn create(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4().to_string(),
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            status: OrderStatus::Pending,
            total_price: total_price(&draft.lines),
            lines: draft.lines,
            created_at: now,
            updated_at: now,
        };

        let mut orders = self.orders.write()?;
        if orders.contains_key(&order.id) {
            return Err(DomainError::Internal(format!(
                "generated order id '{}' collides with an existing order",
                order.id
            )));
        }
        orders.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Order>, DomainError> {
        Ok(self.orders.read()?.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Order>, DomainError> {
        let mut items: Vec<Order> = self.orders.read()?.values().cloned().collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(items)
    }

    fn update(&self, mut order: Order) -> Result<Option<Order>, DomainError> {
        let mut orders = self.orders.write()?;
        let Some(existing) = orders.get_mut(&order.id) else {
            return Ok(None);
        };

        order.created_at = existing.created_at;
        order.updated_at = Utc::now();
        *existing = order.clone();
        Ok(Some(order))
    }

    fn delete(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.orders.write()?.remove(id).is_some())
    }
}
