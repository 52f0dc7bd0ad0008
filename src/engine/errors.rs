//! Error types for order pricing
//!
//! Domain failures (`OrderError`) are kept apart from configuration
//! failures (`PolicyError`) so callers of `create_order` only ever have to
//! handle the one rejection the pricer can produce.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned when an order request is rejected
///
/// The display text is fixed; the offending value travels in the variant
/// for callers and logs that want it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Quantity fell outside the inclusive bounds of the policy
    #[error("Invalid quantity")]
    InvalidQuantity { quantity: i64 },
}

impl OrderError {
    /// The rejected quantity
    pub fn quantity(&self) -> i64 {
        match self {
            OrderError::InvalidQuantity { quantity } => *quantity,
        }
    }
}

/// Errors raised while building an `OrderPolicy`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Minimum quantity must be at least 1, got: {0}")]
    MinQuantityTooLow(i64),

    #[error("Minimum quantity {min} exceeds maximum quantity {max}")]
    InvertedBounds { min: i64, max: i64 },

    #[error("Unit price must be positive, got: {0}")]
    InvalidUnitPrice(Decimal),

    #[error("Order identifier must not be empty")]
    EmptyOrderId,

    #[error("Maximum quantity {max_quantity} at unit price {unit_price} overflows the total")]
    TotalOverflow {
        max_quantity: i64,
        unit_price: Decimal,
    },

    #[error("Unparsable value for {key}: {value}")]
    Unparsable { key: String, value: String },
}
