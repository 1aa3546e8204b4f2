use serde::{Deserialize, Serialize};

// ============================================================================
// Order Item
// ============================================================================

/// A line of an order.
///
/// `name` and `price` are copied from the product when the item is built, so
/// later product changes never alter the totals of existing orders.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderItem {
    id: String,
    product_id: String,
    name: String,
    price: f64,
    quantity: i64,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn order_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_item_creation() {
        let item = OrderItem::new("1", "product 1", 10.0, "p1", 2);

        assert_eq!(item.id(), "1");
        assert_eq!(item.name(), "product 1");
        assert_eq!(item.price(), 10.0);
        assert_eq!(item.product_id(), "p1");
        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn test_order_total_is_price_times_quantity() {
        let item = OrderItem::new("1", "product 1", 10.0, "p1", 2);
        assert_eq!(item.order_total(), 20.0);

        let item = OrderItem::new("2", "product 2", 2.5, "p2", 4);
        assert_eq!(item.order_total(), 10.0);
    }

    #[test]
    fn test_order_item_is_not_validated() {
        let item = OrderItem::new("1", "product 1", -10.0, "p1", 0);
        assert_eq!(item.order_total(), 0.0);

        let item = OrderItem::new("2", "product 2", 10.0, "p2", -1);
        assert_eq!(item.order_total(), -10.0);
    }
}
