use bigdecimal::{BigDecimal, Zero};

use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl Product {
    /// Rejects blank identifiers and names, and negative price or stock.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.product_id.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "productId must not be blank".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("name must not be blank".to_string()));
        }
        if self.price < BigDecimal::zero() {
            return Err(DomainError::InvalidInput(format!(
                "price must not be negative, got {}",
                self.price
            )));
        }
        if self.quantity < 0 {
            return Err(DomainError::InvalidInput(format!(
                "quantity must not be negative, got {}",
                self.quantity
            )));
        }
        Ok(())
    }
}
