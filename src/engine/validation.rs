//! Order validation functions
//!
//! Every rule an order must pass before it is priced lives here. Only the
//! quantity is checked: the product id and coupon code are taken as given.

use crate::models::CreateOrderInput;

use super::config::OrderPolicy;
use super::errors::OrderError;

/// Validate that quantity lies within the policy bounds
///
/// # Returns
/// * `Ok(())` if `min_quantity <= quantity <= max_quantity`
/// * `Err(OrderError::InvalidQuantity)` otherwise
///
/// # Example
/// ```ignore
/// let policy = OrderPolicy::default();
/// assert!(validate_quantity(5, &policy).is_ok());
/// assert!(validate_quantity(6, &policy).is_err());
/// ```
pub fn validate_quantity(quantity: i64, policy: &OrderPolicy) -> Result<(), OrderError> {
    if !policy.accepts(quantity) {
        return Err(OrderError::InvalidQuantity { quantity });
    }
    Ok(())
}

/// Validate an order before pricing
///
/// Single entry point for order validation; returns the first failure.
pub fn validate_order(input: &CreateOrderInput, policy: &OrderPolicy) -> Result<(), OrderError> {
    validate_quantity(input.quantity, policy)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity_in_range() {
        let policy = OrderPolicy::default();
        for quantity in 1..=5 {
            assert!(validate_quantity(quantity, &policy).is_ok());
        }
    }

    #[test]
    fn test_validate_quantity_out_of_range() {
        let policy = OrderPolicy::default();
        for quantity in [i64::MIN, -1, 0, 6, 100, i64::MAX] {
            assert_eq!(
                validate_quantity(quantity, &policy),
                Err(OrderError::InvalidQuantity { quantity })
            );
        }
    }

    #[test]
    fn test_validate_order_ignores_product_and_coupon() {
        let policy = OrderPolicy::default();

        let empty_product = CreateOrderInput::new("", 2);
        assert!(validate_order(&empty_product, &policy).is_ok());

        let with_coupon = CreateOrderInput::new("P1", 2).with_coupon("");
        assert!(validate_order(&with_coupon, &policy).is_ok());
    }

    #[test]
    fn test_validate_order_uses_policy_bounds() {
        let policy = OrderPolicy {
            min_quantity: 10,
            max_quantity: 20,
            ..OrderPolicy::default()
        };

        assert!(validate_order(&CreateOrderInput::new("P1", 5), &policy).is_err());
        assert!(validate_order(&CreateOrderInput::new("P1", 10), &policy).is_ok());
        assert!(validate_order(&CreateOrderInput::new("P1", 20), &policy).is_ok());
    }
}
