//! The six seed end-to-end scenarios from spec §8.
//!
//! Each scenario resets the global order-id counter so that the first
//! order constructed within it is id 1, matching the spec's narrative
//! exactly. Because the counter is process-wide, scenarios that depend on
//! a reset hold `SERIAL` for their duration so they can't interleave with
//! each other across test threads.

use std::sync::Mutex;

use orderbook_rs::{Order, OrderBook, Price, Side};

static SERIAL: Mutex<()> = Mutex::new(());

fn reset() -> std::sync::MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    orderbook_rs::OrderId::reset_for_tests();
    guard
}

#[test]
fn basic_quote_match_cancel_expiry_sequence() {
    let _guard = reset();
    let mut book = OrderBook::new();

    let bids = vec![
        Order::new_limit(100, 10, Side::Bid, Some(101), Some(1)).unwrap(), // id 1
        Order::new_limit(101, 5, Side::Bid, Some(101), None).unwrap(),     // id 2
    ];
    let asks = vec![
        Order::new_limit(102, 7, Side::Ask, Some(201), None).unwrap(), // id 3
        Order::new_limit(103, 8, Side::Ask, Some(202), None).unwrap(), // id 4
    ];
    let id1 = bids[0].id();
    let id4 = asks[1].id();

    book.process_orders(bids).unwrap();
    book.process_orders(asks).unwrap();

    assert_eq!(book.best_bid(), Some(101));
    assert_eq!(book.best_ask(), Some(102));
    assert_eq!(book.spread(), Some(1.0));
    assert_eq!(book.mid_price(), Some(101.5));

    let unfilled = book.unfilled_orders(101);
    assert!(unfilled.contains(&(id1, Price::Limit(100), 10)));

    let market_sell = vec![Order::new_market(8, Side::Ask, Some(203)).unwrap()];
    let notifications = book.process_orders(market_sell).unwrap();

    // Two trades: 5@101 against order 2, then 3@100 against order 1.
    let trader_101 = &notifications[&101];
    assert_eq!(trader_101.len(), 2);
    let total_filled: u64 = trader_101.iter().map(|n| n.total_filled_volume()).sum();
    assert_eq!(total_filled, 8);

    assert_eq!(book.best_bid(), Some(100));
    assert_eq!(book.bid_depth(), 7);

    book.process_cancellations(&[id4]);
    assert_eq!(book.ask_depth(), 7);

    book.advance(); // order 1's lifetime (1 tick) elapses
    assert_eq!(book.best_bid(), None);

    book.clear();
    assert_eq!(book.bid_depth(), 0);
    assert_eq!(book.ask_depth(), 0);
}

#[test]
fn same_level_fifo() {
    let _guard = reset();
    let mut book = OrderBook::new();

    let a = Order::new_limit(100, 5, Side::Bid, Some(1), None).unwrap();
    let b = Order::new_limit(100, 5, Side::Bid, Some(2), None).unwrap();
    let c = Order::new_limit(100, 5, Side::Bid, Some(3), None).unwrap();
    book.process_orders(vec![a, b, c]).unwrap();

    let sweep = Order::new_market(7, Side::Ask, Some(9)).unwrap();
    let notifications = book.process_orders(vec![sweep]).unwrap();

    let a_notif = &notifications[&1][0];
    let b_notif = &notifications[&2][0];
    assert_eq!(a_notif.total_filled_volume(), 5);
    assert!(a_notif.is_filled());
    assert_eq!(b_notif.total_filled_volume(), 2);
    assert_eq!(b_notif.remaining_volume(), 3);
    assert!(!notifications.contains_key(&3));

    assert_eq!(book.bid_depth(), 8);
}

#[test]
fn partial_fill_preserves_priority() {
    let _guard = reset();
    let mut book = OrderBook::new();

    let a = Order::new_limit(100, 10, Side::Bid, Some(1), None).unwrap();
    let b = Order::new_limit(100, 10, Side::Bid, Some(2), None).unwrap();
    book.process_orders(vec![a, b]).unwrap();

    let sweep1 = Order::new_market(3, Side::Ask, Some(9)).unwrap();
    let n1 = book.process_orders(vec![sweep1]).unwrap();
    assert_eq!(n1[&1][0].total_filled_volume(), 3);
    assert_eq!(n1[&1][0].remaining_volume(), 7);
    assert!(!n1.contains_key(&2));

    let sweep2 = Order::new_market(5, Side::Ask, Some(9)).unwrap();
    let n2 = book.process_orders(vec![sweep2]).unwrap();
    assert_eq!(n2[&1][0].total_filled_volume(), 5);
    assert_eq!(n2[&1][0].remaining_volume(), 2);
    assert!(!n2.contains_key(&2), "order 2 must not fill before order 1");
}

#[test]
fn price_priority_across_levels() {
    let _guard = reset();
    let mut book = OrderBook::new();

    book.process_orders(vec![
        Order::new_limit(99, 10, Side::Bid, None, None).unwrap(),
        Order::new_limit(100, 10, Side::Bid, None, None).unwrap(),
        Order::new_limit(101, 10, Side::Bid, None, None).unwrap(),
    ])
    .unwrap();

    let sweep = Order::new_market(15, Side::Ask, None).unwrap();
    book.process_orders(vec![sweep]).unwrap();

    assert_eq!(book.best_bid(), Some(99));
    assert_eq!(book.bid_depth(), 5);
}

#[test]
fn empty_level_reap() {
    let _guard = reset();
    let mut book = OrderBook::new();

    let order = Order::new_limit(100, 5, Side::Bid, None, None).unwrap();
    let id = order.id();
    book.process_orders(vec![order]).unwrap();
    assert_eq!(book.best_bid(), Some(100));

    book.process_cancellations(&[id]);
    assert_eq!(book.best_bid(), None);
    assert_eq!(book.best_bid(), None, "repeated queries stay reaped");
}

#[test]
fn wheel_wrap_around_tolerated() {
    let _guard = reset();
    let mut book = OrderBook::with_lifetimes(1, 4).unwrap();

    for _ in 0..4 {
        let order = Order::new_limit(100, 1, Side::Bid, None, Some(1)).unwrap();
        book.process_orders(vec![order]).unwrap();
        book.advance();
    }

    assert_eq!(book.bid_depth(), 0);
}
