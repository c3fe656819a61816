//! Errors raised by price-level (C2) operations.

use crate::OrderId;

/// Contract violations raised while manipulating a single [`crate::PriceLevel`].
///
/// These are all tier-1 "contract violation" errors in the engine's error
/// taxonomy: the caller did something the data structure's contract
/// forbids. State is validated before mutation, so a `PriceLevelError`
/// never leaves the level half-updated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PriceLevelError {
    /// `cancel` was asked to remove an order that is not resting at this level.
    #[error("order {0} not found at this price level")]
    OrderNotFound(OrderId),

    /// A volume-bearing constructor was asked to build a zero-volume order.
    #[error("order volume must be greater than zero, got {0}")]
    InvalidVolume(u64),

    /// An explicit `lifetime` of zero was supplied; lifetimes, when given,
    /// must be strictly positive (a zero-tick order would expire before it
    /// could ever be observed resting).
    #[error("order lifetime must be greater than zero when specified, got {0}")]
    InvalidLifetime(u32),
}
