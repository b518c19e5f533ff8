use std::sync::Arc;

use common::SequentialIdGenerator;
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Cart, Customer, Money, Product};

fn make_products(n: usize) -> Vec<Arc<Product>> {
    (0..n)
        .map(|i| {
            let cents = 1000 + i64::try_from(i).unwrap_or(0) * 7;
            Arc::new(
                Product::new(format!("SKU-{i:04}"), format!("Item {i}"), Money::from_cents(cents))
                    .unwrap(),
            )
        })
        .collect()
}

fn bench_cart_add(c: &mut Criterion) {
    let products = make_products(50);

    c.bench_function("domain/cart_add_50_products", |b| {
        b.iter(|| {
            let cart = Cart::new();
            for product in &products {
                cart.add(product, 2).unwrap();
            }
            cart
        });
    });
}

fn bench_cart_total(c: &mut Criterion) {
    let products = make_products(50);
    let cart = Cart::new();
    for product in &products {
        cart.add(product, 3).unwrap();
    }

    c.bench_function("domain/cart_total_50_lines", |b| {
        b.iter(|| cart.total());
    });
}

fn bench_place_order(c: &mut Criterion) {
    let products = make_products(10);
    let ids = SequentialIdGenerator::new();
    let customer = Customer::new("C-BENCH", "Bench Customer").unwrap();

    c.bench_function("domain/fill_cart_and_place_order", |b| {
        b.iter(|| {
            for product in &products {
                customer.add_to_cart(product, 1).unwrap();
            }
            customer.place_order(&ids).unwrap()
        });
    });
}

criterion_group!(benches, bench_cart_add, bench_cart_total, bench_place_order);
criterion_main!(benches);
