//! Errors raised by the book façade (C5) and the per-side book (C3).

use pricelevel::{OrderId, PriceLevelError};

/// Contract violations raised by [`crate::OrderBook`] and [`crate::PriceBook`].
///
/// These are all tier-1 "contract violation" errors: the caller (or, for
/// `SameSideFill`, the engine's own matching path) broke a documented
/// invariant. State is validated before mutation wherever these are raised,
/// so an `OrderBookError` never leaves the book half-updated. Benign misses
/// — cancelling an id that has already filled or expired — are not errors
/// at all; see [`crate::OrderBook::process_cancellations`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum OrderBookError {
    /// A lower-level [`PriceLevelError`] propagated unchanged.
    #[error(transparent)]
    PriceLevel(#[from] PriceLevelError),

    /// `PriceBook::cancel` was asked to remove an id that isn't in this
    /// side's order index at all. Unlike `OrderBook::process_cancellations`
    /// (which tolerates unknown ids as a documented contract), this is the
    /// engine-internal cancel path, whose caller must already know the id
    /// is resident — a miss here means an index/book got out of sync.
    #[error("order {0} is not resident on this side of the book")]
    UnknownOrder(OrderId),

    /// An incoming order was offered to the same-side book for matching.
    #[error("cannot match an order against its own side of the book")]
    SameSideFill,

    /// `OrderBook::with_lifetimes` was given non-positive bounds or
    /// `min_lifetime >= max_lifetime`.
    #[error("invalid wheel configuration: min_lifetime={min}, max_lifetime={max}")]
    InvalidConfiguration {
        /// The rejected `min_lifetime`.
        min: u32,
        /// The rejected `max_lifetime`.
        max: u32,
    },
}
