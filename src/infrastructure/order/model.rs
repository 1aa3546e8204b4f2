use serde::Serialize;

use crate::domain::checkout::{Order, OrderError, OrderItem};

/// Row of the `orders` table, with its items attached when loaded
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct OrderModel {
    pub id: String,
    pub customer_id: String,
    pub total: f64,
    #[sqlx(skip)]
    pub items: Vec<OrderItemModel>,
}

/// Row of the `order_items` table
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct OrderItemModel {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub order_id: String,
    pub product_id: String,
    pub total: f64,
}

impl OrderItemModel {
    pub fn new(order_id: &str, item: &OrderItem) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            price: item.price(),
            quantity: item.quantity(),
            order_id: order_id.to_string(),
            product_id: item.product_id().to_string(),
            total: item.order_total(),
        }
    }
}

impl From<&Order> for OrderModel {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            customer_id: order.customer_id().to_string(),
            total: order.total(),
            items: order
                .items()
                .iter()
                .map(|item| OrderItemModel::new(order.id(), item))
                .collect(),
        }
    }
}

impl From<OrderItemModel> for OrderItem {
    fn from(model: OrderItemModel) -> Self {
        OrderItem::new(model.id, model.name, model.price, model.product_id, model.quantity)
    }
}

impl TryFrom<OrderModel> for Order {
    type Error = OrderError;

    fn try_from(model: OrderModel) -> Result<Self, Self::Error> {
        let items = model.items.into_iter().map(OrderItem::from).collect();
        Order::new(model.id, model.customer_id, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_order_carries_totals() {
        let items = vec![
            OrderItem::new("1", "product 1", 10.0, "p1", 2),
            OrderItem::new("2", "product 2", 5.0, "p2", 3),
        ];
        let order = Order::new("o1", "c1", items).unwrap();

        let model = OrderModel::from(&order);

        assert_eq!(model.total, 35.0);
        assert_eq!(model.items.len(), 2);
        assert_eq!(model.items[0].order_id, "o1");
        assert_eq!(model.items[0].total, 20.0);
        assert_eq!(model.items[1].total, 15.0);
    }

    #[test]
    fn test_order_from_model_restores_items() {
        let order = Order::new("o1", "c1", vec![OrderItem::new("1", "product 1", 10.0, "p1", 2)])
            .unwrap();

        let restored = Order::try_from(OrderModel::from(&order)).unwrap();

        assert_eq!(restored, order);
    }

    #[test]
    fn test_order_model_without_items_is_rejected() {
        let model = OrderModel {
            id: "o1".to_string(),
            customer_id: "c1".to_string(),
            total: 0.0,
            items: vec![],
        };

        assert_eq!(Order::try_from(model), Err(OrderError::EmptyItems));
    }
}
