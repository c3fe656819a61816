//! Demonstrates the prelude module: quoting, matching, and the book's
//! derived queries using only `orderbook_rs::prelude::*`.

use orderbook_rs::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Prelude Demo ===\n");

    let mut book = OrderBook::new();

    let bid = Order::new_limit(3_000, 100, Side::Bid, Some(1), None).unwrap();
    println!("Added BUY order: 100 units @ 3000");
    book.process_orders(vec![bid]).unwrap();

    let ask = Order::new_limit(3_100, 100, Side::Ask, Some(2), None).unwrap();
    println!("Added SELL order: 100 units @ 3100");
    book.process_orders(vec![ask]).unwrap();

    println!("\nOrder Book State:");
    println!("  Best BID:  {:?}", book.best_bid());
    println!("  Best ASK:  {:?}", book.best_ask());
    println!("  Spread:    {:?}", book.spread());
    println!("  Mid price: {:?}", book.mid_price());

    let aggressor = Order::new_market(40, Side::Bid, Some(3)).unwrap();
    let notifications = book.process_orders(vec![aggressor]).unwrap();
    println!("\nMarket buy for 40 units crossed the resting ask:");
    for notif in &notifications[&2] {
        println!(
            "  trader 2 filled {} units @ avg price {:.2}",
            notif.total_filled_volume(),
            notif.average_price()
        );
    }

    println!("\n{}", book.display());
}
