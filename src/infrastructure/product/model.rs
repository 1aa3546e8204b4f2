use serde::Serialize;

use crate::domain::product::{Product, ProductError};

/// Row of the `products` table
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ProductModel {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl From<&Product> for ProductModel {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

impl TryFrom<ProductModel> for Product {
    type Error = ProductError;

    fn try_from(model: ProductModel) -> Result<Self, Self::Error> {
        Product::new(model.id, model.name, model.price)
    }
}
