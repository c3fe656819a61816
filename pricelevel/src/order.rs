//! Order records (C1): the unit of volume the rest of the engine matches.

use crate::{OrderId, Price, PriceLevelError, Side};

/// A single order: resting liquidity or an incoming aggressor.
///
/// `id`, `side`, and `price` never change after construction. `volume` only
/// ever decreases, via [`Order::fill`], down to zero; an order at zero
/// volume is never reinserted anywhere (callers drop it instead).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    price: Price,
    volume: u64,
    side: Side,
    is_market: bool,
    trader_id: Option<u64>,
    lifetime: Option<u32>,
}

impl Order {
    /// Builds a resting limit order. Fails if `volume` is zero or an
    /// explicit `lifetime` of zero is given (a zero-tick order could never
    /// be observed resting).
    pub fn new_limit(
        price: u64,
        volume: u64,
        side: Side,
        trader_id: Option<u64>,
        lifetime: Option<u32>,
    ) -> Result<Self, PriceLevelError> {
        if volume == 0 {
            return Err(PriceLevelError::InvalidVolume(volume));
        }
        if let Some(0) = lifetime {
            return Err(PriceLevelError::InvalidLifetime(0));
        }
        Ok(Self {
            id: OrderId::next(),
            price: Price::Limit(price),
            volume,
            side,
            is_market: false,
            trader_id,
            lifetime,
        })
    }

    /// Builds a market order: never rests, matches at whatever price is
    /// available. Equivalent to the spec's `MarketOrder` convenience
    /// constructor.
    pub fn new_market(volume: u64, side: Side, trader_id: Option<u64>) -> Result<Self, PriceLevelError> {
        if volume == 0 {
            return Err(PriceLevelError::InvalidVolume(volume));
        }
        Ok(Self {
            id: OrderId::next(),
            price: Price::Market,
            volume,
            side,
            is_market: true,
            trader_id,
            lifetime: None,
        })
    }

    /// This order's identity.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// This order's price (concrete tick, or the market sentinel).
    pub fn price(&self) -> Price {
        self.price
    }

    /// Remaining (unfilled) volume.
    pub fn volume(&self) -> u64 {
        self.volume
    }

    /// Which side of the book this order belongs to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// `true` for market orders.
    pub fn is_market(&self) -> bool {
        self.is_market
    }

    /// The trader this order's fills should be reported to, if any.
    pub fn trader_id(&self) -> Option<u64> {
        self.trader_id
    }

    /// The requested resting lifetime in ticks, if the caller gave one.
    pub fn lifetime(&self) -> Option<u32> {
        self.lifetime
    }

    /// `true` once this order has no remaining volume.
    pub fn is_filled(&self) -> bool {
        self.volume == 0
    }

    /// Reduces remaining volume by `qty`, saturating at zero.
    ///
    /// This is the one mutation path for a live order's volume. It is
    /// exposed crate-wide (rather than `pub(crate)`-to-`PriceLevel` only)
    /// because matching an incoming order against a resting one spans both
    /// this crate's [`crate::PriceLevel`] and the book layer above it that
    /// owns the aggressor; both sides of a fill go through this method.
    pub fn fill(&mut self, qty: u64) {
        self.volume = self.volume.saturating_sub(qty);
    }
}
