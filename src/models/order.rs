use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request to purchase a quantity of a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    /// Product identifier (not checked by the pricer)
    pub product_id: String,
    /// Requested units; the pricer enforces the policy bounds
    pub quantity: i64,
    /// Accepted but has no effect on the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
}

/// Outcome of an accepted order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub order_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl CreateOrderInput {
    /// Create an order request without a coupon
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            coupon_code: None,
        }
    }

    /// Attach a coupon code
    pub fn with_coupon(mut self, code: impl Into<String>) -> Self {
        self.coupon_code = Some(code.into());
        self
    }

    pub fn has_coupon(&self) -> bool {
        self.coupon_code.is_some()
    }
}
