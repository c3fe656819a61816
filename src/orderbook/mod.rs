//! OrderBook façade (C5), the per-side price book (C3), the expiration
//! wheel (C4), and trade-to-notification aggregation (§4.5 of the spec).

mod book;
mod error;
mod notification;
mod price_book;
mod wheel;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use notification::TradesNotification;
