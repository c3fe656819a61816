//! Order price, including the market-order sentinel.

use std::fmt;

/// An order's price.
///
/// Limit orders carry a concrete integer tick; market orders carry
/// [`Price::Market`] instead of a signed-infinity sentinel. The source
/// simulator uses `+inf`/`-inf` to make the "does this cross?" predicate
/// uniform across market and limit orders; this crate targets integer tick
/// prices (no floating-point tick normalization, per this engine's
/// non-goals), so it takes the explicit "market" variant the source's own
/// design notes call out as the replacement for that trick on fixed-point
/// books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    /// A concrete limit price, in integer ticks.
    Limit(u64),
    /// A market order: matches at whatever price is available.
    Market,
}

impl Price {
    /// The concrete tick, or `None` for a market order.
    pub fn as_limit(self) -> Option<u64> {
        match self {
            Price::Limit(p) => Some(p),
            Price::Market => None,
        }
    }

    /// `true` for [`Price::Market`].
    pub fn is_market(self) -> bool {
        matches!(self, Price::Market)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Limit(p) => write!(f, "{p}"),
            Price::Market => write!(f, "MARKET"),
        }
    }
}
