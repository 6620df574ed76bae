//! Error types for the order book core.
//!
//! [`OrderBookError`] is the only error type reachable from the public
//! [`crate::OrderBook`] surface (`submit` and `cancel`). [`PriceLevelError`]
//! and [`ExecutionReportError`] guard internal preconditions that the
//! matching driver never violates by construction; surfacing one of them
//! indicates a bug in this crate, not a caller mistake.

use crate::primitives::{OrderId, Shares, TimeInForce};
use thiserror::Error;

/// Errors returned by [`crate::OrderBook::submit`] and
/// [`crate::OrderBook::cancel`].
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum OrderBookError {
    /// `submit` was called with non-positive shares or non-positive price.
    #[error("invalid order: {reason}")]
    InvalidOrder { reason: &'static str },

    /// `submit` was called with a `time_in_force` other than 0. This core
    /// only implements "rest until cancelled"; see the Open Questions in
    /// the design notes for why non-zero values are rejected rather than
    /// silently accepted.
    #[error("unsupported time in force: {0}")]
    UnsupportedTimeInForce(TimeInForce),

    /// `cancel` referenced an order id that is not currently resting.
    #[error("unknown order: {0}")]
    UnknownOrder(OrderId),
}

/// Errors from [`crate::PriceLevel::match_shares`].
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PriceLevelError {
    /// The matching driver requested more shares than the level holds.
    /// The driver never does this by construction (it always clamps the
    /// request to the level's depth); seeing this indicates a book bug.
    #[error("requested {requested} shares but only {available} are resting at this level")]
    InsufficientDepth { requested: Shares, available: Shares },
}

/// Errors from [`crate::ExecutionReport::merge`].
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExecutionReportError {
    /// The two reports being merged describe different arrivals.
    #[error("cannot merge execution reports for different base orders ({expected} != {found})")]
    BaseMismatch { expected: OrderId, found: OrderId },

    /// Both reports already carry a partial fill; a single arrival can
    /// only ever produce one.
    #[error("cannot merge two execution reports that both carry a partial fill")]
    DoublePartial,
}
