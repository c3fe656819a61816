//! Order records and the price-level FIFO building block for `orderbook-rs`.
//!
//! This crate covers the two leaf components of the matching engine:
//! [`Order`]/[`Trade`] value records, and [`PriceLevel`], the per-price FIFO
//! queue with O(1)-amortized cancel-by-identity that the book above this
//! crate walks during matching. It carries no knowledge of a whole book —
//! best-price selection, cross predicates, and expiry live in `orderbook-rs`.

mod error;
mod id;
mod level;
mod order;
mod price;
mod side;
mod trade;

pub use error::PriceLevelError;
pub use id::OrderId;
pub use level::PriceLevel;
pub use order::Order;
pub use price::Price;
pub use side::Side;
pub use trade::Trade;
