//! OrderBook (C5): the façade that owns both sides of the book and the
//! expiration wheel, drives matching, and aggregates trade notifications.

use std::collections::HashMap;
use std::fmt::Write as _;

use pricelevel::{Order, OrderId, Price};
use tracing::{debug, trace, warn};

use crate::orderbook::error::OrderBookError;
use crate::orderbook::notification::{NotificationAggregator, TradesNotification};
use crate::orderbook::price_book::PriceBook;
use crate::orderbook::wheel::ExpirationWheel;

/// Default minimum resting lifetime (ticks) for orders that don't specify
/// one, per spec §6.
pub const DEFAULT_MIN_LIFETIME: u32 = 3;
/// Default wheel size (ticks), per spec §6.
pub const DEFAULT_MAX_LIFETIME: u32 = 10_000;

/// A price-time priority limit order book.
///
/// Owns the bid and ask [`PriceBook`]s and the [`ExpirationWheel`]; drives
/// matching, routes cancellations (explicit and wheel-driven), aggregates
/// per-trader trade notifications, and advances simulated time. See spec
/// §4.4 for the full operation contract.
#[derive(Debug)]
pub struct OrderBook {
    symbol: Option<String>,
    bids: PriceBook,
    asks: PriceBook,
    wheel: ExpirationWheel,
    min_lifetime: u32,
    max_lifetime: u32,
    trade_history: Vec<(u64, u128)>,
}

impl OrderBook {
    /// Creates a book with the spec's default wheel parameters
    /// (`min_lifetime = 3, max_lifetime = 10_000`).
    pub fn new() -> Self {
        Self::with_lifetimes(DEFAULT_MIN_LIFETIME, DEFAULT_MAX_LIFETIME)
            .expect("default lifetimes are always valid")
    }

    /// Creates a book with explicit wheel parameters. Both must be positive
    /// and `min_lifetime < max_lifetime`.
    pub fn with_lifetimes(min_lifetime: u32, max_lifetime: u32) -> Result<Self, OrderBookError> {
        if min_lifetime == 0 || max_lifetime == 0 || min_lifetime >= max_lifetime {
            return Err(OrderBookError::InvalidConfiguration {
                min: min_lifetime,
                max: max_lifetime,
            });
        }
        Ok(Self {
            symbol: None,
            bids: PriceBook::new(true),
            asks: PriceBook::new(false),
            wheel: ExpirationWheel::new(max_lifetime),
            min_lifetime,
            max_lifetime,
            trade_history: Vec::new(),
        })
    }

    /// Attaches a display-only label to this book. Not used for routing —
    /// multi-symbol routing is out of scope for this engine.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// This book's display label, if one was set.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Matches each order against the opposite side, rests any residual
    /// limit volume, and returns the trade notifications produced,
    /// grouped by subscribed trader.
    ///
    /// Orders are processed in the order supplied; each fully matches (or
    /// rests) before the next begins, per spec §4.6.
    pub fn process_orders(
        &mut self,
        orders: Vec<Order>,
    ) -> Result<HashMap<u64, Vec<TradesNotification>>, OrderBookError> {
        trace!(count = orders.len(), "processing order batch");
        let mut aggregator = NotificationAggregator::new();
        let mut batch_volume: u64 = 0;
        let mut batch_notional: u128 = 0;

        for mut order in orders {
            let is_bid = order.side().is_bid();
            let trades = if is_bid {
                self.asks.fill(&mut order)?
            } else {
                self.bids.fill(&mut order)?
            };

            let incoming_remaining = order.volume();
            for trade in &trades {
                let maker_remaining = if is_bid {
                    self.asks.order_volume(trade.ask_order_id)
                } else {
                    self.bids.order_volume(trade.bid_order_id)
                };
                let (bid_remaining, ask_remaining) = if is_bid {
                    (incoming_remaining, maker_remaining)
                } else {
                    (maker_remaining, incoming_remaining)
                };
                aggregator.record_trade(trade, bid_remaining, ask_remaining);
                batch_volume += trade.volume;
                batch_notional += u128::from(trade.price) * u128::from(trade.volume);
            }

            if order.volume() > 0 && !order.is_market() {
                let ttl = order.lifetime().unwrap_or(self.min_lifetime);
                self.wheel.schedule(order.id(), ttl);
                if is_bid {
                    self.bids.add(order);
                } else {
                    self.asks.add(order);
                }
            }
        }

        debug!(
            volume = batch_volume,
            notional = %batch_notional,
            "order batch processed"
        );
        self.trade_history.push((batch_volume, batch_notional));
        Ok(aggregator.into_map())
    }

    /// Cancels each id in `ids`. An id that is not resident on either side
    /// (already filled or expired) is silently ignored — both batch
    /// cancellation and wheel-driven expiry routinely reference dead ids,
    /// per spec §7.
    pub fn process_cancellations(&mut self, ids: &[OrderId]) {
        for &id in ids {
            if self.bids.contains(id) {
                self.bids
                    .cancel(id)
                    .expect("contains() just confirmed residency");
            } else if self.asks.contains(id) {
                self.asks
                    .cancel(id)
                    .expect("contains() just confirmed residency");
            } else {
                warn!(order_id = %id, "cancellation requested for a non-resident order id");
            }
        }
    }

    /// Advances the wheel by one tick and cancels every id it emits.
    pub fn advance(&mut self) {
        let expired = self.wheel.advance();
        trace!(count = expired.len(), "wheel advanced");
        self.process_cancellations(&expired);
    }

    /// Every resting order belonging to `trader_id`, as `(id, price,
    /// volume)`. Iteration order is unspecified, per spec §9.
    pub fn unfilled_orders(&self, trader_id: u64) -> Vec<(OrderId, Price, u64)> {
        let mut out = self
            .bids
            .orders_matching(|order| order.trader_id() == Some(trader_id));
        out.extend(
            self.asks
                .orders_matching(|order| order.trader_id() == Some(trader_id)),
        );
        out
    }

    /// The highest resting bid price, or `None` if the bid side is empty.
    pub fn best_bid(&mut self) -> Option<u64> {
        self.bids.best_price()
    }

    /// The lowest resting ask price, or `None` if the ask side is empty.
    pub fn best_ask(&mut self) -> Option<u64> {
        self.asks.best_price()
    }

    /// `best_ask - best_bid`, rounded to 2 decimals. `None` if either side
    /// is empty.
    pub fn spread(&mut self) -> Option<f64> {
        let bid = self.best_bid()? as f64;
        let ask = self.best_ask()? as f64;
        Some(round2(ask - bid))
    }

    /// `(best_ask + best_bid) / 2`, rounded to 2 decimals. `None` if either
    /// side is empty.
    pub fn mid_price(&mut self) -> Option<f64> {
        let bid = self.best_bid()? as f64;
        let ask = self.best_ask()? as f64;
        Some(round2((ask + bid) / 2.0))
    }

    /// Total resting bid volume.
    pub fn bid_depth(&self) -> u64 {
        self.bids.depth()
    }

    /// Total resting ask volume.
    pub fn ask_depth(&self) -> u64 {
        self.asks.depth()
    }

    /// Every `(total volume, total notional)` pair recorded by a prior
    /// `process_orders` batch, oldest first. Grows monotonically; call
    /// [`OrderBook::clear`] to reset it.
    pub fn trade_history(&self) -> &[(u64, u128)] {
        &self.trade_history
    }

    /// A human-readable dump of both sides' best prices and depth. A
    /// testing/debugging aid, not a contractual format.
    pub fn display(&mut self) -> String {
        let mut out = String::new();
        let label = self.symbol.as_deref().unwrap_or("(unnamed)");
        let _ = writeln!(out, "OrderBook {label}");
        let _ = writeln!(
            out,
            "  best_bid={:?} best_ask={:?} spread={:?} mid={:?}",
            self.best_bid(),
            self.best_ask(),
            self.spread(),
            self.mid_price()
        );
        let _ = writeln!(
            out,
            "  bid_depth={} ask_depth={}",
            self.bid_depth(),
            self.ask_depth()
        );
        out
    }

    /// Resets the book and wheel to empty, and clears `trade_history`. The
    /// global order id counter is untouched, per spec §6.
    pub fn clear(&mut self) {
        self.bids = PriceBook::new(true);
        self.asks = PriceBook::new(false);
        self.wheel = ExpirationWheel::new(self.max_lifetime);
        self.trade_history.clear();
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
