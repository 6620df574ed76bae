//! Core newtypes shared across the order book: identifiers, sides, share
//! counts, prices and money. Kept as thin wrappers over integers so the
//! book's arithmetic can never silently mix, say, a price with a share
//! count.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Unique, book-local identifier assigned to an order at arrival time.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct OrderId(u64);

impl OrderId {
    /// Constructs an `OrderId` from its raw value.
    ///
    /// The book is still the only thing that *assigns* ids, via its own
    /// monotonic counter in [`crate::OrderBook::submit`] — this
    /// constructor exists so callers (and this crate's own tests) can
    /// build an `OrderId` to compare against one the book handed back.
    pub fn new(value: u64) -> Self {
        OrderId(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the book an order rests on or arrives for.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The side an arriving order of this side matches against.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// A non-negative count of shares: either the residual quantity on a
/// resting order, or a cumulative traded/matched total.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash)]
pub struct Shares(u64);

impl Shares {
    pub const ZERO: Shares = Shares(0);

    pub fn new(value: u64) -> Self {
        Shares(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Shares {
    fn from(value: u64) -> Self {
        Shares(value)
    }
}

impl From<Shares> for u64 {
    fn from(value: Shares) -> Self {
        value.0
    }
}

impl Add for Shares {
    type Output = Shares;
    fn add(self, rhs: Shares) -> Shares {
        Shares(self.0 + rhs.0)
    }
}

impl Sub for Shares {
    type Output = Shares;
    fn sub(self, rhs: Shares) -> Shares {
        Shares(self.0 - rhs.0)
    }
}

impl AddAssign for Shares {
    fn add_assign(&mut self, rhs: Shares) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Shares {
    fn sub_assign(&mut self, rhs: Shares) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A price, denominated in ticks. Always positive for a live order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Price(u64);

impl Price {
    pub fn new(value: u64) -> Self {
        Price(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Price(value)
    }
}

impl From<Price> for u64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accumulated money exchanged in trades: `price * shares` summed over
/// every match. Widened to `u128` so it never overflows even for
/// synthetic benchmarks far larger than any real book.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash)]
pub struct Money(u128);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn get(self) -> u128 {
        self.0
    }

    /// `price * shares`, the money exchanged by a single match.
    pub(crate) fn of_trade(price: Price, shares: Shares) -> Money {
        Money(price.0 as u128 * shares.0 as u128)
    }
}

impl From<Money> for u128 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque time-in-force tag. The core only interprets `0` ("rest until
/// cancelled"); see [`crate::error::OrderBookError::UnsupportedTimeInForce`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct TimeInForce(u8);

impl TimeInForce {
    /// Rest indefinitely, i.e. until explicitly cancelled. The only
    /// value this core's matching engine interprets.
    pub const GOOD_TILL_CANCELLED: TimeInForce = TimeInForce(0);

    pub fn new(value: u8) -> Self {
        TimeInForce(value)
    }

    pub fn is_good_till_cancelled(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for TimeInForce {
    fn from(value: u8) -> Self {
        TimeInForce(value)
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
