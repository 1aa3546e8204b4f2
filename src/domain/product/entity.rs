use serde::{Deserialize, Serialize};

use super::errors::ProductError;

// ============================================================================
// Product Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), ProductError> {
        if price < 0.0 {
            return Err(ProductError::NegativePrice(price));
        }
        self.price = price;
        Ok(())
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        if self.price < 0.0 {
            return Err(ProductError::NegativePrice(self.price));
        }
        Ok(())
    }
}

/// The mutable part of a product, keyed by id.
///
/// Only `name` and `price` can be changed once a product has been stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductUpdate {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl ProductUpdate {
    /// Same rules as `Product::new`; an update must leave a loadable product.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        if self.price < 0.0 {
            return Err(ProductError::NegativePrice(self.price));
        }
        Ok(())
    }
}

impl From<&Product> for ProductUpdate {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
