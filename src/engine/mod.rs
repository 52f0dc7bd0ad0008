//! Order Pricing Engine Module
//!
//! This module contains the order pricing functionality:
//! - `errors` - Error types for pricing and policy loading
//! - `config` - Quantity bounds, unit price and identifier policy
//! - `validation` - Order validation functions
//! - `pricing` - Total price calculation
//! - `pricer` - Validates and prices an order request

pub mod config;
pub mod errors;
pub mod pricer;
pub mod pricing;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::OrderPolicy;
pub use errors::{OrderError, PolicyError};
pub use pricer::{create_order, OrderPricer};
pub use pricing::{calculate_total, UNIT_PRICE};
pub use validation::validate_order;
