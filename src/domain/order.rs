use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};

use super::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(OrderStatus::Pending),
            "CONFIRMED" => Ok(OrderStatus::Confirmed),
            "SHIPPED" => Ok(OrderStatus::Shipped),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(DomainError::InvalidInput(format!(
                "unknown order status '{other}'"
            ))),
        }
    }
}

/// A product reference in an incoming order request.
#[derive(Debug, Clone)]
pub struct OrderLineInput {
    pub product_id: String,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub lines: Vec<OrderLineInput>,
}

/// Validated order content, ready to be stored under a fresh id.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub total_price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sum of `unit_price * quantity` over all lines.
pub fn total_price(lines: &[OrderLine]) -> BigDecimal {
    lines.iter().fold(BigDecimal::zero(), |acc, line| {
        acc + &line.unit_price * BigDecimal::from(line.quantity)
    })
}

pub fn validate_quantities<'a>(
    quantities: impl IntoIterator<Item = (&'a str, i32)>,
) -> Result<(), DomainError> {
    let mut seen = false;
    for (product_id, quantity) in quantities {
        seen = true;
        if quantity <= 0 {
            return Err(DomainError::InvalidInput(format!(
                "quantity for product '{product_id}' must be positive, got {quantity}"
            )));
        }
    }
    if !seen {
        return Err(DomainError::InvalidInput(
            "an order must contain at least one product".to_string(),
        ));
    }
    Ok(())
}
