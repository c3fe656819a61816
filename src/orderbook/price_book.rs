//! PriceBook (C3): one side of the book — a price-priority collection of
//! [`PriceLevel`]s plus an id index covering every order resting on this
//! side.

use std::collections::{BTreeMap, HashMap};

use pricelevel::{Order, OrderId, Price, PriceLevel, Side, Trade};

use crate::orderbook::error::OrderBookError;

/// One side (bid or ask) of the book.
///
/// Occupied prices are kept in a `BTreeMap<u64, PriceLevel>`, which is a
/// plain-integer-keyed ordered map: since this engine targets integer tick
/// prices (no floating-point tick normalization, a non-goal), a `BTreeMap`
/// gives the same `O(log #levels)` insert/best-price bound a binary heap
/// paired with a price→level map would, without needing a separate heap —
/// the map's own ordering *is* the priority structure. Ask-side best price
/// is the map's minimum key; bid-side best price is its maximum, so
/// `best_price` reads from the opposite end of the map depending on
/// `is_bid_side`.
///
/// Empty levels are not eagerly removed when their last order cancels or
/// fills: `cancel` and `fill` leave them in the map, and `best_price` lazily
/// reaps them off the appropriate end the next time it is asked for a
/// price. This trades a few stale map entries for O(1) cancel (no tree
/// rebalancing on every cancellation of a level's last order).
#[derive(Debug)]
pub struct PriceBook {
    is_bid_side: bool,
    levels: BTreeMap<u64, PriceLevel>,
    index: HashMap<OrderId, u64>,
}

impl PriceBook {
    /// Creates an empty book for one side.
    pub fn new(is_bid_side: bool) -> Self {
        Self {
            is_bid_side,
            levels: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    /// `true` for the bid side.
    pub fn is_bid_side(&self) -> bool {
        self.is_bid_side
    }

    /// Inserts a resting order. `order` must carry a concrete limit price
    /// on this book's side; never called for market orders (they never
    /// rest, per spec §4.4).
    pub fn add(&mut self, order: Order) {
        let price = order
            .price()
            .as_limit()
            .expect("only limit orders rest in a PriceBook");
        let side = if self.is_bid_side { Side::Bid } else { Side::Ask };
        let level = self
            .levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price, side));
        self.index.insert(order.id(), price);
        level.add(order);
    }

    /// Removes a specific resting order by id.
    ///
    /// Unlike `OrderBook::process_cancellations`, a miss here is a contract
    /// violation: this is the book-internal cancel path, whose callers
    /// (the façade's own cancel routing, and the level itself) must already
    /// know the id is resident.
    pub fn cancel(&mut self, id: OrderId) -> Result<Order, OrderBookError> {
        let price = self
            .index
            .remove(&id)
            .ok_or(OrderBookError::UnknownOrder(id))?;
        let level = self
            .levels
            .get_mut(&price)
            .expect("id index and levels must agree");
        Ok(level.cancel(id)?)
    }

    /// Whether `id` currently rests on this side.
    pub fn contains(&self, id: OrderId) -> bool {
        self.index.contains_key(&id)
    }

    /// The remaining volume of a resident order, or `0` if it is not
    /// resting here (already fully filled or never inserted).
    pub fn order_volume(&self, id: OrderId) -> u64 {
        self.index
            .get(&id)
            .and_then(|price| self.levels.get(price))
            .and_then(|level| level.order(id))
            .map(|order| order.volume())
            .unwrap_or(0)
    }

    /// The best (highest bid / lowest ask) occupied price, reaping any
    /// empty levels encountered along the way. `None` iff this side has no
    /// resting volume at all.
    pub fn best_price(&mut self) -> Option<u64> {
        loop {
            let candidate = if self.is_bid_side {
                *self.levels.keys().next_back()?
            } else {
                *self.levels.keys().next()?
            };
            if self.levels.get(&candidate).is_some_and(PriceLevel::is_empty) {
                self.levels.remove(&candidate);
                continue;
            }
            return Some(candidate);
        }
    }

    /// Total resting volume across all levels.
    pub fn depth(&self) -> u64 {
        self.levels.values().map(PriceLevel::volume).sum()
    }

    /// Every resident order's `(id, price, volume)`, for callers scanning
    /// both sides (e.g. `OrderBook::unfilled_orders`). Filtered by `pred`.
    pub fn orders_matching(
        &self,
        mut pred: impl FnMut(&Order) -> bool,
    ) -> Vec<(OrderId, Price, u64)> {
        let mut out = Vec::new();
        for level in self.levels.values() {
            for order in level.orders() {
                if pred(order) {
                    out.push((order.id(), order.price(), order.volume()));
                }
            }
        }
        out
    }

    /// Matches `incoming` (which must be on the *opposite* side) against
    /// this book's resting liquidity, walking best-price levels first and
    /// each level's FIFO in insertion order, until either `incoming` is
    /// exhausted or no resting level crosses its price.
    ///
    /// Returns every trade produced, in execution order.
    pub fn fill(&mut self, incoming: &mut Order) -> Result<Vec<Trade>, OrderBookError> {
        if incoming.side().is_bid() == self.is_bid_side {
            return Err(OrderBookError::SameSideFill);
        }

        let mut trades = Vec::new();
        while incoming.volume() > 0 {
            let Some(best) = self.best_price() else {
                break;
            };
            if !crosses(incoming.price(), best, self.is_bid_side) {
                break;
            }
            let level = self.levels.get_mut(&best).expect("just reaped");
            let (level_trades, fully_filled) = level.fill(incoming);
            for order in &fully_filled {
                self.index.remove(&order.id());
            }
            trades.extend(level_trades);
        }
        Ok(trades)
    }
}

/// `true` if an incoming order at `incoming_price` would cross a resting
/// price of `resting_price` on the side this book represents.
///
/// A bid crosses an ask when `incoming_bid_price >= resting_ask_price`; an
/// ask crosses a bid when `incoming_ask_price <= resting_bid_price`. Market
/// orders (the `Price::Market` sentinel) always cross, regardless of which
/// side is resting — this is the explicit-variant replacement for the
/// source simulator's `±∞` sentinel trick (see spec §9 design notes).
fn crosses(incoming_price: Price, resting_price: u64, resting_is_bid: bool) -> bool {
    match incoming_price {
        Price::Market => true,
        Price::Limit(p) => {
            if resting_is_bid {
                p <= resting_price
            } else {
                p >= resting_price
            }
        }
    }
}
