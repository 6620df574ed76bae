//! A single-symbol central limit order book.
//!
//! An order book is the record a market maintains of outstanding limit
//! orders, organized by price and, within a price, by arrival order. This
//! crate is the matching core of such a book: it accepts limit order
//! arrivals, matches them against resting liquidity under price-time
//! priority, and reports what traded. It owns no network surface, no
//! persistence, and no symbol directory — a deployment multiplexing many
//! symbols instantiates one [`OrderBook`] per symbol and wires up
//! everything around it.
//!
//! ```
//! use clob_core::{OrderBook, Side, Shares, Price, TimeInForce};
//!
//! let mut book = OrderBook::new();
//! book.submit(Side::Buy, Shares::new(10), Price::new(100), TimeInForce::GOOD_TILL_CANCELLED).unwrap();
//! let report = book
//!     .submit(Side::Sell, Shares::new(4), Price::new(100), TimeInForce::GOOD_TILL_CANCELLED)
//!     .unwrap();
//! assert_eq!(report.shares_executed(), Shares::new(4));
//! assert_eq!(book.best_bid(), Some(Price::new(100)));
//! ```

mod book;
mod error;
mod execution;
mod order;
mod price_level;
mod primitives;

pub use book::OrderBook;
pub use error::{ExecutionReportError, OrderBookError, PriceLevelError};
pub use execution::ExecutionReport;
pub use order::Order;
pub use price_level::PriceLevel;
pub use primitives::{Money, OrderId, Price, Shares, Side, TimeInForce};
