// Library Crate Root
// lib.rs

pub mod engine;
pub mod models;

pub use engine::{create_order, OrderError, OrderPolicy, OrderPricer, PolicyError};
pub use models::{CreateOrderInput, OrderResult};
