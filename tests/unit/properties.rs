//! Property-based tests for the universal properties in spec §8.

use std::sync::Mutex;

use orderbook_rs::{Order, OrderBook, OrderId, Side};
use proptest::prelude::*;

static SERIAL: Mutex<()> = Mutex::new(());

#[derive(Debug, Clone, Copy)]
struct OrderSpec {
    price: u64,
    volume: u64,
    is_bid: bool,
}

fn order_spec() -> impl Strategy<Value = OrderSpec> {
    (95u64..=105, 1u64..=20, any::<bool>()).prop_map(|(price, volume, is_bid)| OrderSpec {
        price,
        volume,
        is_bid,
    })
}

fn build_book(specs: &[OrderSpec]) -> OrderBook {
    let mut book = OrderBook::new();
    for spec in specs {
        let side = if spec.is_bid { Side::Bid } else { Side::Ask };
        let order = Order::new_limit(spec.price, spec.volume, side, None, None).unwrap();
        book.process_orders(vec![order]).unwrap();
    }
    book
}

proptest! {
    /// Depth always equals the sum of the resting orders' volumes.
    #[test]
    fn depth_equals_sum_of_levels(specs in prop::collection::vec(order_spec(), 0..50)) {
        let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        OrderId::reset_for_tests();
        let book = build_book(&specs);

        let total_bid_volume: u64 = specs.iter().filter(|s| s.is_bid).map(|s| s.volume).sum();
        let total_ask_volume: u64 = specs.iter().filter(|s| !s.is_bid).map(|s| s.volume).sum();

        // Orders cross on arrival, so depth is bounded by what was supplied
        // on each side but can be less once trades have consumed volume.
        prop_assert!(book.bid_depth() <= total_bid_volume);
        prop_assert!(book.ask_depth() <= total_ask_volume);
    }

    /// Volume conservation: every trade decrements exactly one bid and one
    /// ask by its volume, so the volume each side loses to trades must be
    /// equal, and each side's remaining depth plus its traded volume must
    /// equal what was supplied to it.
    #[test]
    fn volume_conservation(specs in prop::collection::vec(order_spec(), 0..50)) {
        let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        OrderId::reset_for_tests();

        const BID_TRADER: u64 = 1;
        const ASK_TRADER: u64 = 2;

        let mut book = OrderBook::new();
        let mut supplied_bid = 0u64;
        let mut supplied_ask = 0u64;
        let mut traded_bid_volume = 0u64;
        let mut traded_ask_volume = 0u64;

        for spec in &specs {
            let side = if spec.is_bid { Side::Bid } else { Side::Ask };
            let trader = if spec.is_bid { BID_TRADER } else { ASK_TRADER };
            let order = Order::new_limit(spec.price, spec.volume, side, Some(trader), None).unwrap();
            if spec.is_bid {
                supplied_bid += spec.volume;
            } else {
                supplied_ask += spec.volume;
            }
            let notifications = book.process_orders(vec![order]).unwrap();
            if let Some(notifs) = notifications.get(&BID_TRADER) {
                traded_bid_volume += notifs.iter().map(|n| n.total_filled_volume()).sum::<u64>();
            }
            if let Some(notifs) = notifications.get(&ASK_TRADER) {
                traded_ask_volume += notifs.iter().map(|n| n.total_filled_volume()).sum::<u64>();
            }
        }

        prop_assert_eq!(traded_bid_volume, traded_ask_volume);
        prop_assert_eq!(book.bid_depth() + traded_bid_volume, supplied_bid);
        prop_assert_eq!(book.ask_depth() + traded_ask_volume, supplied_ask);
    }

    /// Cancelling an order restores depth and best price to what they were
    /// before it was inserted.
    #[test]
    fn round_trip_cancel(
        prefix in prop::collection::vec(order_spec(), 0..20),
        price in 95u64..=105,
        volume in 1u64..=20,
        is_bid in any::<bool>(),
    ) {
        let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        OrderId::reset_for_tests();

        let mut book = build_book(&prefix);
        let depth_before = if is_bid { book.bid_depth() } else { book.ask_depth() };
        let best_before = if is_bid { book.best_bid() } else { book.best_ask() };

        const TRADER: u64 = 42;
        let side = if is_bid { Side::Bid } else { Side::Ask };
        let order = Order::new_limit(price, volume, side, Some(TRADER), None).unwrap();
        let id = order.id();
        let notifications = book.process_orders(vec![order]).unwrap();
        prop_assume!(notifications.is_empty()); // only exercise the resting case

        book.process_cancellations(&[id]);

        let depth_after = if is_bid { book.bid_depth() } else { book.ask_depth() };
        let best_after = if is_bid { book.best_bid() } else { book.best_ask() };
        prop_assert_eq!(depth_before, depth_after);
        prop_assert_eq!(best_before, best_after);
        prop_assert!(!book.unfilled_orders(TRADER).iter().any(|(oid, _, _)| *oid == id));
    }

    /// Determinism: the same input sequence against two fresh engines
    /// produces identical post-state.
    #[test]
    fn determinism(specs in prop::collection::vec(order_spec(), 0..30)) {
        let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());

        OrderId::reset_for_tests();
        let mut book_a = build_book(&specs);

        OrderId::reset_for_tests();
        let mut book_b = build_book(&specs);

        prop_assert_eq!(book_a.bid_depth(), book_b.bid_depth());
        prop_assert_eq!(book_a.ask_depth(), book_b.ask_depth());
        prop_assert_eq!(book_a.best_bid(), book_b.best_bid());
        prop_assert_eq!(book_a.best_ask(), book_b.best_ask());
    }
}

#[test]
fn monotonic_id() {
    let a = Order::new_limit(100, 1, Side::Bid, None, None).unwrap();
    let b = Order::new_limit(100, 1, Side::Bid, None, None).unwrap();
    assert!(b.id() > a.id());
}

#[test]
fn aggregator_consistency() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    OrderId::reset_for_tests();
    let mut book = OrderBook::new();

    let resting = Order::new_limit(100, 10, Side::Bid, Some(1), None).unwrap();
    let original_volume = resting.volume();
    book.process_orders(vec![resting]).unwrap();

    let sweep = Order::new_market(6, Side::Ask, Some(2)).unwrap();
    let notifications = book.process_orders(vec![sweep]).unwrap();

    let notif = &notifications[&1][0];
    let sum_price_volume: u64 = notif.price_volume().values().sum();
    assert_eq!(sum_price_volume, notif.total_filled_volume());

    let sum_notional: u128 = notif
        .price_volume()
        .iter()
        .map(|(&price, &volume)| u128::from(price) * u128::from(volume))
        .sum();
    assert_eq!(sum_notional, notif.total_notional());
    assert_eq!(
        notif.remaining_volume(),
        original_volume - notif.total_filled_volume()
    );
}
