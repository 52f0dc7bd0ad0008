use order_pricing::{CreateOrderInput, OrderPolicy, OrderPricer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_pricing=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pricer = OrderPricer::new(OrderPolicy::from_env()?)?;

    let requests = [
        CreateOrderInput::new("P1", 1),
        CreateOrderInput::new("P1", 5),
        CreateOrderInput::new("P1", 0),
        CreateOrderInput::new("P1", 6),
        CreateOrderInput::new("P1", 3).with_coupon("SAVE10"),
    ];

    for request in &requests {
        match pricer.create_order(request) {
            Ok(result) => tracing::info!(
                product_id = %request.product_id,
                quantity = request.quantity,
                "Order accepted: {}",
                serde_json::to_string(&result)?
            ),
            Err(e) => tracing::warn!(
                product_id = %request.product_id,
                quantity = request.quantity,
                "Order rejected: {}",
                e
            ),
        }
    }

    Ok(())
}
