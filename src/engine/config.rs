use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::PolicyError;
use super::pricing::UNIT_PRICE;

pub const ENV_MIN_QUANTITY: &str = "ORDER_MIN_QUANTITY";
pub const ENV_MAX_QUANTITY: &str = "ORDER_MAX_QUANTITY";
pub const ENV_UNIT_PRICE: &str = "ORDER_UNIT_PRICE";
pub const ENV_ORDER_ID: &str = "ORDER_ID";

/// Rules applied by the pricer to every order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPolicy {
    /// Smallest accepted quantity (inclusive)
    #[serde(default = "default_min_quantity")]
    pub min_quantity: i64,

    /// Largest accepted quantity (inclusive)
    #[serde(default = "default_max_quantity")]
    pub max_quantity: i64,

    /// Price charged per unit
    #[serde(default = "default_unit_price")]
    pub unit_price: Decimal,

    /// Identifier returned for every accepted order
    #[serde(default = "default_order_id")]
    pub order_id: String,
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self {
            min_quantity: default_min_quantity(),
            max_quantity: default_max_quantity(),
            unit_price: default_unit_price(),
            order_id: default_order_id(),
        }
    }
}

impl OrderPolicy {
    /// Build a policy from `ORDER_*` environment variables
    ///
    /// Unset variables keep their default; unparsable values are an error.
    /// The result is validated.
    pub fn from_env() -> Result<Self, PolicyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a policy from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PolicyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let policy = Self {
            min_quantity: parse_or(&lookup, ENV_MIN_QUANTITY, defaults.min_quantity)?,
            max_quantity: parse_or(&lookup, ENV_MAX_QUANTITY, defaults.max_quantity)?,
            unit_price: parse_or(&lookup, ENV_UNIT_PRICE, defaults.unit_price)?,
            order_id: lookup(ENV_ORDER_ID).unwrap_or(defaults.order_id),
        };

        policy.validate()?;

        tracing::info!(
            min_quantity = policy.min_quantity,
            max_quantity = policy.max_quantity,
            unit_price = %policy.unit_price,
            order_id = %policy.order_id,
            "Order policy loaded"
        );
        Ok(policy)
    }

    /// Check that the policy can accept at least one order
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.min_quantity < 1 {
            return Err(PolicyError::MinQuantityTooLow(self.min_quantity));
        }
        if self.min_quantity > self.max_quantity {
            return Err(PolicyError::InvertedBounds {
                min: self.min_quantity,
                max: self.max_quantity,
            });
        }
        if self.unit_price <= Decimal::ZERO {
            return Err(PolicyError::InvalidUnitPrice(self.unit_price));
        }
        if self.order_id.is_empty() {
            return Err(PolicyError::EmptyOrderId);
        }
        // Largest total must be representable so pricing cannot overflow
        if Decimal::from(self.max_quantity)
            .checked_mul(self.unit_price)
            .is_none()
        {
            return Err(PolicyError::TotalOverflow {
                max_quantity: self.max_quantity,
                unit_price: self.unit_price,
            });
        }
        Ok(())
    }

    /// Whether a quantity lies within the inclusive bounds
    pub fn accepts(&self, quantity: i64) -> bool {
        (self.min_quantity..=self.max_quantity).contains(&quantity)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, PolicyError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            tracing::warn!(key, value = %raw, "Unparsable order policy setting");
            PolicyError::Unparsable {
                key: key.to_string(),
                value: raw.clone(),
            }
        }),
        None => Ok(default),
    }
}

// Default value functions for serde
fn default_min_quantity() -> i64 {
    1
}

fn default_max_quantity() -> i64 {
    5
}

fn default_unit_price() -> Decimal {
    UNIT_PRICE
}

fn default_order_id() -> String {
    "ORD-001".to_string()
}
