use criterion::{black_box, criterion_group, criterion_main, Criterion};
use order_pricing::{create_order, CreateOrderInput, OrderPricer};

fn bench_create_order(c: &mut Criterion) {
    let accepted = CreateOrderInput::new("P1", 3).with_coupon("SAVE10");
    let rejected = CreateOrderInput::new("P1", 6);
    let pricer = OrderPricer::default();

    c.bench_function("create_order_accepted", |b| {
        b.iter(|| pricer.create_order(black_box(&accepted)))
    });

    c.bench_function("create_order_rejected", |b| {
        b.iter(|| pricer.create_order(black_box(&rejected)))
    });

    c.bench_function("create_order_default_policy", |b| {
        b.iter(|| create_order(black_box(&accepted)))
    });
}

criterion_group!(benches, bench_create_order);
criterion_main!(benches);
