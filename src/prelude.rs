//! Prelude module that re-exports commonly used types and traits.
//!
//! This module provides a convenient way to import the most commonly used
//! types from this crate. Instead of importing each type individually, you
//! can use:
//!
//! ```rust
//! use orderbook_rs::prelude::*;
//! ```

// Core order book types
pub use crate::orderbook::{OrderBook, OrderBookError, TradesNotification};

// Order, trade, price, and side types from pricelevel
pub use pricelevel::{Order, OrderId, Price, PriceLevelError, Side, Trade};
