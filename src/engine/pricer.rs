//! Order Pricer
//!
//! `OrderPricer` validates an order request against its policy and prices
//! it. It holds no mutable state, so one instance can be shared across
//! threads freely.

use tracing::{debug, instrument};

use crate::models::{CreateOrderInput, OrderResult};

use super::config::OrderPolicy;
use super::errors::{OrderError, PolicyError};
use super::pricing::calculate_total;
use super::validation::validate_order;

/// Validates and prices order requests
#[derive(Debug, Clone, Default)]
pub struct OrderPricer {
    policy: OrderPolicy,
}

impl OrderPricer {
    /// Create a pricer applying the given policy
    ///
    /// The policy is validated here, so every quantity it accepts can be
    /// priced without overflow.
    pub fn new(policy: OrderPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &OrderPolicy {
        &self.policy
    }

    /// Validate the request and compute its total
    ///
    /// The coupon code is accepted but does not affect the result, and every
    /// accepted order receives the policy's fixed identifier.
    #[instrument(
        skip(self, input),
        fields(
            product_id = %input.product_id,
            quantity = input.quantity,
            has_coupon = input.has_coupon()
        )
    )]
    pub fn create_order(&self, input: &CreateOrderInput) -> Result<OrderResult, OrderError> {
        if let Err(e) = validate_order(input, &self.policy) {
            debug!(
                min = self.policy.min_quantity,
                max = self.policy.max_quantity,
                "Order rejected: {}",
                e
            );
            return Err(e);
        }

        let result = OrderResult {
            order_id: self.policy.order_id.clone(),
            total_price: calculate_total(input.quantity, self.policy.unit_price),
        };

        debug!(order_id = %result.order_id, total_price = %result.total_price, "Order priced");
        Ok(result)
    }
}

/// Create an order under the default policy
///
/// Accepts quantities 1 through 5, charges 100 per unit and always returns
/// the identifier `ORD-001`.
pub fn create_order(input: &CreateOrderInput) -> Result<OrderResult, OrderError> {
    OrderPricer::default().create_order(input)
}
