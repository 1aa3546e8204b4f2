use serde::Serialize;

use crate::domain::customer::{Address, Customer, CustomerError};

/// Row of the `customers` table, address flattened into columns
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct CustomerModel {
    pub id: String,
    pub name: String,
    pub street: Option<String>,
    pub number: Option<i64>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub active: bool,
    pub reward_points: f64,
}

impl From<&Customer> for CustomerModel {
    fn from(customer: &Customer) -> Self {
        let address = customer.address();

        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            street: address.map(|a| a.street().to_string()),
            number: address.map(Address::number),
            zipcode: address.map(|a| a.zip().to_string()),
            city: address.map(|a| a.city().to_string()),
            active: customer.is_active(),
            reward_points: customer.reward_points(),
        }
    }
}

impl TryFrom<CustomerModel> for Customer {
    type Error = CustomerError;

    fn try_from(model: CustomerModel) -> Result<Self, Self::Error> {
        let mut customer = Customer::new(model.id, model.name)?;

        if let (Some(street), Some(number), Some(zipcode), Some(city)) =
            (model.street, model.number, model.zipcode, model.city)
        {
            customer.change_address(Address::new(street, number, zipcode, city)?);
        }
        if model.active {
            customer.activate()?;
        }
        customer.add_reward_points(model.reward_points);

        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_without_address_maps_to_nulls() {
        let customer = Customer::new("c1", "customer 1").unwrap();
        let model = CustomerModel::from(&customer);

        assert_eq!(model.street, None);
        assert_eq!(model.number, None);
        assert_eq!(model.zipcode, None);
        assert_eq!(model.city, None);
        assert!(!model.active);
    }

    #[test]
    fn test_active_row_without_address_is_rejected() {
        let model = CustomerModel {
            id: "c1".to_string(),
            name: "customer 1".to_string(),
            street: None,
            number: None,
            zipcode: None,
            city: None,
            active: true,
            reward_points: 0.0,
        };

        assert_eq!(Customer::try_from(model), Err(CustomerError::AddressRequired));
    }
}
