//! Trade receipts emitted by a fill.

use crate::OrderId;

/// One fill event between exactly one bid and one ask, at a single price
/// and volume.
///
/// Trades are ephemeral: they are produced during a `process_orders` batch
/// and consumed by the notification aggregator above this crate, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trade {
    /// The resting or aggressing bid involved in this fill.
    pub bid_order_id: OrderId,
    /// The resting or aggressing ask involved in this fill.
    pub ask_order_id: OrderId,
    /// The bid order's trader, if subscribed.
    pub bid_trader_id: Option<u64>,
    /// The ask order's trader, if subscribed.
    pub ask_trader_id: Option<u64>,
    /// The execution price, in integer ticks. Always a resting limit
    /// price: market orders never set the trade price, they take whatever
    /// the resting side quotes.
    pub price: u64,
    /// The executed volume.
    pub volume: u64,
}

impl Trade {
    /// Builds a trade receipt.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bid_order_id: OrderId,
        ask_order_id: OrderId,
        bid_trader_id: Option<u64>,
        ask_trader_id: Option<u64>,
        price: u64,
        volume: u64,
    ) -> Self {
        Self {
            bid_order_id,
            ask_order_id,
            bid_trader_id,
            ask_trader_id,
            price,
            volume,
        }
    }
}
