//! Trade-to-notification aggregation (spec §4.5): one `TradesNotification`
//! per `(trader_id, order_id)` touched during a `process_orders` batch.

use std::collections::HashMap;

use pricelevel::{OrderId, Trade};

/// Per-order aggregation of one batch's fills, for one subscribed trader.
///
/// A `TradesNotification` is created the first time an order with a
/// non-`None` `trader_id` fills during a batch, and updated in place for
/// every subsequent fill of the same order within that batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradesNotification {
    order_id: OrderId,
    trader_id: u64,
    total_filled_volume: u64,
    total_notional: u128,
    price_volume: HashMap<u64, u64>,
    remaining_volume: u64,
    num_trades: u32,
}

impl TradesNotification {
    fn new(order_id: OrderId, trader_id: u64, remaining_volume: u64) -> Self {
        Self {
            order_id,
            trader_id,
            total_filled_volume: 0,
            total_notional: 0,
            price_volume: HashMap::new(),
            remaining_volume,
            num_trades: 0,
        }
    }

    fn record(&mut self, price: u64, volume: u64, remaining_volume: u64) {
        self.total_filled_volume += volume;
        self.total_notional += u128::from(price) * u128::from(volume);
        *self.price_volume.entry(price).or_insert(0) += volume;
        self.remaining_volume = remaining_volume;
        self.num_trades += 1;
    }

    /// The order this notification reports fills for.
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// The trader subscribed to this order's fills.
    pub fn trader_id(&self) -> u64 {
        self.trader_id
    }

    /// Total volume filled across this batch.
    pub fn total_filled_volume(&self) -> u64 {
        self.total_filled_volume
    }

    /// Volume-weighted notional (`Σ price · volume`) across this batch.
    pub fn total_notional(&self) -> u128 {
        self.total_notional
    }

    /// Filled volume broken down by execution price.
    pub fn price_volume(&self) -> &HashMap<u64, u64> {
        &self.price_volume
    }

    /// The order's remaining (unfilled) volume as of the end of the batch.
    pub fn remaining_volume(&self) -> u64 {
        self.remaining_volume
    }

    /// `true` once the order has no remaining volume.
    pub fn is_filled(&self) -> bool {
        self.remaining_volume == 0
    }

    /// How many individual trades contributed to this notification.
    pub fn num_trades(&self) -> u32 {
        self.num_trades
    }

    /// `total_notional / total_filled_volume`, or `0.0` if nothing has
    /// filled yet.
    pub fn average_price(&self) -> f64 {
        if self.total_filled_volume == 0 {
            0.0
        } else {
            self.total_notional as f64 / self.total_filled_volume as f64
        }
    }
}

/// Builds the `trader_id -> Vec<TradesNotification>` map for one batch.
///
/// Notifications for the same trader appear in the order their underlying
/// order first filled within the batch, per spec §4.5.
#[derive(Debug, Default)]
pub(crate) struct NotificationAggregator {
    index: HashMap<(u64, OrderId), usize>,
    by_trader: HashMap<u64, Vec<TradesNotification>>,
}

impl NotificationAggregator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Folds one side of a `Trade` into the aggregator. No-op if
    /// `trader_id` is `None` (unsubscribed / anonymous, per spec §3).
    pub(crate) fn record(
        &mut self,
        trader_id: Option<u64>,
        order_id: OrderId,
        price: u64,
        volume: u64,
        remaining_volume: u64,
    ) {
        let Some(trader_id) = trader_id else {
            return;
        };
        let key = (trader_id, order_id);
        if let Some(&notif_idx) = self.index.get(&key) {
            self.by_trader.get_mut(&trader_id).expect("indexed")[notif_idx]
                .record(price, volume, remaining_volume);
            return;
        }
        let bucket = self.by_trader.entry(trader_id).or_default();
        let notif_idx = bucket.len();
        let mut notification = TradesNotification::new(order_id, trader_id, remaining_volume);
        notification.record(price, volume, remaining_volume);
        bucket.push(notification);
        self.index.insert(key, notif_idx);
    }

    /// Folds both sides of a `Trade`, given each side's remaining volume as
    /// of the moment this trade was applied.
    pub(crate) fn record_trade(
        &mut self,
        trade: &Trade,
        bid_remaining: u64,
        ask_remaining: u64,
    ) {
        self.record(
            trade.bid_trader_id,
            trade.bid_order_id,
            trade.price,
            trade.volume,
            bid_remaining,
        );
        self.record(
            trade.ask_trader_id,
            trade.ask_order_id,
            trade.price,
            trade.volume,
            ask_remaining,
        );
    }

    pub(crate) fn into_map(self) -> HashMap<u64, Vec<TradesNotification>> {
        self.by_trader
    }
}
