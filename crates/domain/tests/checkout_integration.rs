//! Integration tests for the checkout flow.
//!
//! These tests drive a customer's cart into an order through the public API
//! and check the cart/order properties end to end.

use std::sync::Arc;

use common::{IdGenerator, SequentialIdGenerator};
use domain::{Customer, DomainError, ErrorKind, Money, OrderStatus, Product};

fn product(id: &str, name: &str, price: &str) -> Arc<Product> {
    Arc::new(Product::new(id, name, price.parse::<Money>().unwrap()).unwrap())
}

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

struct Catalog {
    laptop: Arc<Product>,
    mouse: Arc<Product>,
    headset: Arc<Product>,
}

fn catalog() -> Catalog {
    Catalog {
        laptop: product("P-1001", "Ultrabook Laptop", "350000.00"),
        mouse: product("P-1002", "Wireless Mouse", "8500.00"),
        headset: product("P-1003", "Bluetooth Headset", "22000.00"),
    }
}

fn filled_customer(catalog: &Catalog) -> Customer {
    let customer = Customer::new("C-0001", "Ada Lovelace").unwrap();
    customer.add_to_cart(&catalog.laptop, 1).unwrap();
    customer.add_to_cart(&catalog.mouse, 2).unwrap();
    customer.add_to_cart(&catalog.headset, 1).unwrap();
    customer
}

mod cart_behaviour {
    use super::*;

    #[test]
    fn remove_unknown_product_is_not_found_and_changes_nothing() {
        let catalog = catalog();
        let customer = Customer::new("C-1", "Ada").unwrap();
        customer.add_to_cart(&catalog.laptop, 1).unwrap();
        let before = customer.cart().lines();

        let err = customer.remove_from_cart(&catalog.mouse, 1).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(customer.cart().lines(), before);
    }

    #[test]
    fn zero_quantity_is_rejected_everywhere() {
        let catalog = catalog();
        let customer = filled_customer(&catalog);
        let before = customer.cart().lines();

        assert_eq!(
            customer.add_to_cart(&catalog.mouse, 0),
            Err(DomainError::InvalidQuantity { quantity: 0 })
        );
        assert_eq!(
            customer.remove_from_cart(&catalog.mouse, 0),
            Err(DomainError::InvalidQuantity { quantity: 0 })
        );
        assert_eq!(customer.cart().lines(), before);
    }

    #[test]
    fn total_sums_rounded_line_totals() {
        let customer = Customer::new("C-1", "Ada").unwrap();
        let a = product("A", "Washer", "0.333");
        let b = product("B", "Spring", "1.005");
        customer.add_to_cart(&a, 3).unwrap(); // 0.999 -> 1.00
        customer.add_to_cart(&b, 1).unwrap(); // 1.005 -> 1.01

        assert_eq!(customer.cart_total(), money("2.01"));
    }

    #[test]
    fn demo_cart_totals() {
        let catalog = catalog();
        let customer = filled_customer(&catalog);
        assert_eq!(customer.cart_total(), money("389000.00"));

        customer.remove_from_cart(&catalog.mouse, 1).unwrap();
        assert_eq!(customer.cart().quantity_of(catalog.mouse.id()), 1);
        assert_eq!(customer.cart_total(), money("380500.00"));
    }
}

mod order_placement {
    use super::*;

    #[test]
    fn empty_cart_cannot_be_ordered() {
        let customer = Customer::new("C-1", "Ada").unwrap();
        let ids = SequentialIdGenerator::new();

        let err = customer.place_order(&ids).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::State);
        assert_eq!(err.to_string(), "Cannot place order: cart is empty");
        assert!(customer.cart().is_empty());
        assert_eq!(ids.issued(), 0);
    }

    #[test]
    fn order_mirrors_cart_at_call_time() {
        let catalog = catalog();
        let customer = filled_customer(&catalog);
        let cart_lines = customer.cart().lines();
        let cart_total = customer.cart_total();

        let order = customer.place_order(&SequentialIdGenerator::new()).unwrap();

        assert_eq!(order.lines().len(), cart_lines.len());
        for (order_line, cart_line) in order.lines().iter().zip(&cart_lines) {
            assert_eq!(order_line.product(), cart_line.product());
            assert_eq!(order_line.quantity(), cart_line.quantity());
        }
        assert_eq!(order.total(), cart_total);
        assert_eq!(order.total(), money("389000.00"));
        assert!(customer.cart().is_empty());
    }

    #[test]
    fn order_ids_are_injected() {
        let catalog = catalog();
        let customer = filled_customer(&catalog);

        let order = customer.place_order(&SequentialIdGenerator::new()).unwrap();

        assert_eq!(order.id().as_str(), "O-0001");
    }

    #[test]
    fn custom_generator_is_used() {
        struct Fixed;

        impl IdGenerator for Fixed {
            fn next_id(&self, prefix: &str) -> String {
                format!("{prefix}-FIXED")
            }
        }

        let catalog = catalog();
        let customer = filled_customer(&catalog);
        let order = customer.place_order(&Fixed).unwrap();
        assert_eq!(order.id().as_str(), "O-FIXED");
    }

    #[test]
    fn status_walks_the_usual_path() {
        let catalog = catalog();
        let customer = filled_customer(&catalog);
        let order = customer.place_order(&SequentialIdGenerator::new()).unwrap();

        assert_eq!(order.status(), OrderStatus::New);
        order.set_status(OrderStatus::Paid);
        assert_eq!(order.status(), OrderStatus::Paid);
        order.set_status(OrderStatus::Shipped);
        assert_eq!(order.status(), OrderStatus::Shipped);
        assert_eq!(order.total(), money("389000.00"));
    }

    #[test]
    fn shipping_before_payment_is_not_blocked() {
        let catalog = catalog();
        let customer = filled_customer(&catalog);
        let order = customer.place_order(&SequentialIdGenerator::new()).unwrap();

        order.set_status(OrderStatus::Shipped);

        assert_eq!(order.status(), OrderStatus::Shipped);
        assert!(!OrderStatus::New.is_conventional_successor(OrderStatus::Shipped));
    }

    #[test]
    fn unknown_status_text_is_rejected() {
        let catalog = catalog();
        let customer = filled_customer(&catalog);
        let order = customer.place_order(&SequentialIdGenerator::new()).unwrap();

        let err = order.set_status_str("REFUNDED").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(order.status(), OrderStatus::New);
    }
}

mod concurrency {
    use super::*;

    #[test]
    fn concurrent_adds_and_checkout_never_lose_units() {
        let catalog = catalog();
        let customer = Customer::new("C-1", "Ada").unwrap();
        let ids = SequentialIdGenerator::new();

        let ordered: u64 = std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..200 {
                        customer.add_to_cart(&catalog.mouse, 1).unwrap();
                    }
                });
            }

            let checkout = s.spawn(|| {
                let mut ordered = 0;
                for _ in 0..50 {
                    match customer.place_order(&ids) {
                        Ok(order) => ordered += order.total_quantity(),
                        Err(DomainError::EmptyCart) => {}
                        Err(other) => panic!("unexpected error: {other}"),
                    }
                }
                ordered
            });

            checkout.join().unwrap()
        });

        let left = u64::from(customer.cart().quantity_of(catalog.mouse.id()));
        assert_eq!(ordered + left, 800);
    }
}
