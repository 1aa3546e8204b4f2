use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::order_item::OrderItem;

// ============================================================================
// Order Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::order_total).sum()
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() {
            return Err(OrderError::EmptyId);
        }
        if self.customer_id.is_empty() {
            return Err(OrderError::EmptyCustomerId);
        }
        if self.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total_single_item() {
        let item = OrderItem::new("1", "product 1", 10.0, "p1", 2);
        let order = Order::new("o1", "c1", vec![item]).unwrap();

        assert_eq!(order.id(), "o1");
        assert_eq!(order.customer_id(), "c1");
        assert_eq!(order.total(), 20.0);
    }

    #[test]
    fn test_order_total_sums_items() {
        let items = vec![
            OrderItem::new("1", "product 1", 100.0, "p1", 2),
            OrderItem::new("2", "product 2", 200.0, "p2", 2),
            OrderItem::new("3", "product 3", 0.5, "p3", 3),
        ];
        let order = Order::new("o1", "c1", items).unwrap();

        assert_eq!(order.total(), 601.5);
    }

    #[test]
    fn test_order_keeps_item_order() {
        let items = vec![
            OrderItem::new("b", "product 2", 1.0, "p2", 1),
            OrderItem::new("a", "product 1", 1.0, "p1", 1),
        ];
        let order = Order::new("o1", "c1", items).unwrap();

        let ids: Vec<&str> = order.items().iter().map(OrderItem::id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_order_validation() {
        let item = || OrderItem::new("1", "product 1", 10.0, "p1", 2);

        assert_eq!(Order::new("", "c1", vec![item()]), Err(OrderError::EmptyId));
        assert_eq!(Order::new("o1", "", vec![item()]), Err(OrderError::EmptyCustomerId));
        assert_eq!(Order::new("o1", "c1", vec![]), Err(OrderError::EmptyItems));
    }
}
