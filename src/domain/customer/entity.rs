use serde::{Deserialize, Serialize};

use super::errors::CustomerError;
use super::value_objects::Address;

// ============================================================================
// Customer Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: f64,
}

impl Customer {
    /// New customers start inactive, without an address and with no reward points.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0.0,
        };

        if customer.id.is_empty() {
            return Err(CustomerError::EmptyId);
        }
        if customer.name.is_empty() {
            return Err(CustomerError::EmptyName);
        }

        Ok(customer)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> f64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: f64) {
        self.reward_points += points;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new("Rua 15", 105, "70277", "Brasilia").unwrap()
    }

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new("c1", "customer 1").unwrap();

        assert_eq!(customer.id(), "c1");
        assert_eq!(customer.name(), "customer 1");
        assert!(customer.address().is_none());
        assert!(!customer.is_active());
        assert_eq!(customer.reward_points(), 0.0);
    }

    #[test]
    fn test_customer_requires_id_and_name() {
        assert_eq!(Customer::new("", "customer 1"), Err(CustomerError::EmptyId));
        assert_eq!(Customer::new("c1", ""), Err(CustomerError::EmptyName));
    }

    #[test]
    fn test_activate_requires_address() {
        let mut customer = Customer::new("c1", "customer 1").unwrap();

        assert_eq!(customer.activate(), Err(CustomerError::AddressRequired));
        assert!(!customer.is_active());

        customer.change_address(address());
        customer.activate().unwrap();
        assert!(customer.is_active());

        customer.deactivate();
        assert!(!customer.is_active());
    }

    #[test]
    fn test_change_name() {
        let mut customer = Customer::new("c1", "customer 1").unwrap();

        customer.change_name("customer 2").unwrap();
        assert_eq!(customer.name(), "customer 2");
        assert_eq!(customer.change_name(""), Err(CustomerError::EmptyName));
        assert_eq!(customer.name(), "customer 2");
    }

    #[test]
    fn test_reward_points_accumulate() {
        let mut customer = Customer::new("c1", "customer 1").unwrap();

        customer.add_reward_points(10.0);
        customer.add_reward_points(5.0);

        assert_eq!(customer.reward_points(), 15.0);
    }
}
