//! Demonstrates the expiration wheel: a resting order with a short
//! lifetime is cancelled automatically once enough ticks have elapsed,
//! without an explicit `process_cancellations` call.

use orderbook_rs::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Expiration Wheel Demo ===\n");

    let mut book = OrderBook::new();

    let short_lived = Order::new_limit(100, 10, Side::Bid, Some(1), Some(2)).unwrap();
    let long_lived = Order::new_limit(99, 10, Side::Bid, Some(1), None).unwrap();
    book.process_orders(vec![short_lived, long_lived]).unwrap();

    println!("Before any tick: bid_depth = {}", book.bid_depth());

    for tick in 1..=3 {
        book.advance();
        println!(
            "After tick {tick}: best_bid = {:?}, bid_depth = {}",
            book.best_bid(),
            book.bid_depth()
        );
    }
}
