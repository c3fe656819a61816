//! # Price-Time Priority Limit Order Book
//!
//! An in-memory matching engine that accepts limit and market orders,
//! executes them against resting liquidity under strict price-time
//! priority, supports targeted cancellation by order identity, and ages
//! resting orders out via a bounded expiration wheel.
//!
//! ## Design Goals
//!
//! - **Correctness**: price priority, time priority within a price, and
//!   partial-fill semantics hold for every input sequence.
//! - **Predictable cost**: insertion, matching, and cancel-by-identity all
//!   stay cheap at the order counts a single price level can accumulate
//!   (see [`pricelevel::PriceLevel`]'s FIFO-with-tombstones design).
//! - **Determinism**: identical input sequences against identical initial
//!   state (including the order id counter) produce bit-identical trade
//!   sequences, notifications, and book states.
//!
//! ## Scope
//!
//! This is a single-threaded, synchronous, run-to-completion engine — no
//! locking, no async, no cooperative yield points. Callers that need
//! parallelism run independent [`OrderBook`] instances per symbol or
//! shard; this crate does not coordinate across instances.
//!
//! Out of scope: persistence, networking, multi-symbol routing,
//! margin/risk checks, self-trade prevention, hidden/iceberg orders,
//! pro-rata matching, and floating-point tick normalization (prices are
//! exact integer ticks throughout).
//!
//! ## Workspace layout
//!
//! - [`pricelevel`] — order/trade value records and the per-price FIFO
//!   queue with O(1)-amortized cancel-by-identity.
//! - This crate (`orderbook_rs`) — the per-side price book, the
//!   expiration wheel, the order book façade that drives matching and
//!   aggregates trade notifications, and this crate's error type.
//!
//! ## Example
//!
//! ```
//! use orderbook_rs::prelude::*;
//!
//! let mut book = OrderBook::new();
//! let bid = Order::new_limit(100, 10, Side::Bid, Some(1), None).unwrap();
//! let ask = Order::new_market(5, Side::Ask, Some(2)).unwrap();
//!
//! book.process_orders(vec![bid]).unwrap();
//! let notifications = book.process_orders(vec![ask]).unwrap();
//!
//! assert_eq!(book.bid_depth(), 5);
//! assert!(notifications.contains_key(&1));
//! ```

pub mod orderbook;
pub mod prelude;

pub use orderbook::{OrderBook, OrderBookError, TradesNotification};
pub use pricelevel::{Order, OrderId, Price, PriceLevelError, Side, Trade};
