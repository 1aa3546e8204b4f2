use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Customer address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: i64,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: i64,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, CustomerError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };

        if address.street.is_empty() {
            return Err(CustomerError::EmptyStreet);
        }
        if address.zip.is_empty() {
            return Err(CustomerError::EmptyZip);
        }
        if address.city.is_empty() {
            return Err(CustomerError::EmptyCity);
        }

        Ok(address)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_creation() {
        let address = Address::new("Rua 15", 105, "70277", "Brasilia").unwrap();

        assert_eq!(address.street(), "Rua 15");
        assert_eq!(address.number(), 105);
        assert_eq!(address.zip(), "70277");
        assert_eq!(address.city(), "Brasilia");
    }

    #[test]
    fn test_address_requires_fields() {
        assert_eq!(Address::new("", 1, "70277", "Brasilia"), Err(CustomerError::EmptyStreet));
        assert_eq!(Address::new("Rua 15", 1, "", "Brasilia"), Err(CustomerError::EmptyZip));
        assert_eq!(Address::new("Rua 15", 1, "70277", ""), Err(CustomerError::EmptyCity));
    }

    #[test]
    fn test_address_display() {
        let address = Address::new("Rua 15", 105, "70277", "Brasilia").unwrap();
        assert_eq!(address.to_string(), "Rua 15, 105, 70277 Brasilia");
    }
}
