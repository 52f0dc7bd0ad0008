pub mod order;

pub use order::{CreateOrderInput, OrderResult};
