//! The per-symbol order book: two price-indexed maps, an archive of
//! emptied price levels, an order locator, and the matching driver.

use crate::error::OrderBookError;
use crate::execution::ExecutionReport;
use crate::order::Order;
use crate::price_level::PriceLevel;
use crate::primitives::{OrderId, Price, Shares, Side, TimeInForce};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

/// A single-symbol central limit order book.
///
/// `OrderBook` is a single-threaded, non-reentrant unit: every operation
/// runs to completion before the next begins, and there is no callback
/// surface during matching. Deployments that multiplex many symbols
/// instantiate one `OrderBook` per symbol; this type stores no symbol of
/// its own and serialising access across threads is the caller's job.
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: BTreeMap<Price, PriceLevel>,
    asks: BTreeMap<Price, PriceLevel>,
    archive: HashMap<Price, PriceLevel>,
    order_index: HashMap<OrderId, (Side, Price)>,
    total_volume: Shares,
    next_order_id: u64,
}

impl OrderBook {
    /// An empty order book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits a new limit order for matching.
    ///
    /// Assigns the arrival a monotonically increasing id, matches it
    /// against resting liquidity on the opposite side under price-time
    /// priority, and rests whatever remains. Always returns a report
    /// with `base_id` set, even when nothing matched.
    ///
    /// `shares` and `limit_price` must both be positive; `time_in_force`
    /// must be `0` ("rest until cancelled") — this core implements no
    /// other policy (see the design notes' Open Questions). Violating
    /// either constraint leaves the book unchanged, consumes no id, and
    /// fails with [`OrderBookError`].
    pub fn submit(
        &mut self,
        side: Side,
        shares: Shares,
        limit_price: Price,
        time_in_force: TimeInForce,
    ) -> Result<ExecutionReport, OrderBookError> {
        if shares.is_zero() {
            return Err(OrderBookError::InvalidOrder {
                reason: "shares must be positive",
            });
        }
        if limit_price.get() == 0 {
            return Err(OrderBookError::InvalidOrder {
                reason: "limit_price must be positive",
            });
        }
        if !time_in_force.is_good_till_cancelled() {
            return Err(OrderBookError::UnsupportedTimeInForce(time_in_force));
        }

        let id = OrderId::new(self.next_order_id);
        self.next_order_id += 1;

        let incoming = Order::new(id, side, shares, limit_price, time_in_force);
        let mut report = ExecutionReport::new(id);
        let mut remaining = shares;

        while !remaining.is_zero() {
            let Some(opposite_price) = self.best_opposite_price(side) else {
                break;
            };
            if !Self::is_marketable(side, limit_price, opposite_price) {
                break;
            }

            let mut level = self
                .take_level(side.opposite(), opposite_price)
                .expect("price key was just read from this side's map");

            let take = remaining.min(level.depth());
            let sub = level
                .match_shares(id, take)
                .expect("take is clamped to depth by construction");

            for filled_id in sub.fully_filled() {
                self.order_index.remove(filled_id);
            }
            remaining -= take;
            report
                .merge(sub)
                .expect("a single arrival produces at most one partial fill");

            if level.is_empty() {
                trace!(price = opposite_price.get(), "price level emptied, archiving");
                self.archive.insert(opposite_price, level);
            } else {
                self.put_level(side.opposite(), opposite_price, level);
            }
        }

        if !remaining.is_zero() {
            let resting_order = incoming.clone_with_shares(remaining);
            self.rest(side, limit_price, resting_order);
        }

        self.total_volume += report.shares_executed();
        debug!(
            order_id = %id,
            side = %side,
            shares_executed = %report.shares_executed(),
            "order submitted"
        );

        Ok(report)
    }

    /// Cancels a resting order.
    ///
    /// Fails with [`OrderBookError::UnknownOrder`] if `order_id` is not
    /// currently resting; the book is unchanged in that case. Otherwise
    /// the order is removed from its price level, and if that empties
    /// the level it is moved to the archive, preserving its `volume`.
    pub fn cancel(&mut self, order_id: OrderId) -> Result<(), OrderBookError> {
        let (side, price) = self
            .order_index
            .remove(&order_id)
            .ok_or(OrderBookError::UnknownOrder(order_id))?;

        let mut level = self
            .take_level(side, price)
            .expect("order_index pointed at a live price level");
        level
            .remove(order_id)
            .expect("order_index and the level's queue must agree");

        if level.is_empty() {
            self.archive.insert(price, level);
        } else {
            self.put_level(side, price, level);
        }

        Ok(())
    }

    /// Cumulative shares ever matched at `price`, live or archived. Zero
    /// if no level has ever existed at that price.
    pub fn volume_at(&self, price: Price) -> Shares {
        let in_bids = self.bids.get(&price);
        let in_asks = self.asks.get(&price);
        let in_archive = self.archive.get(&price);

        debug_assert!(
            [in_bids.is_some(), in_asks.is_some(), in_archive.is_some()]
                .iter()
                .filter(|present| **present)
                .count()
                <= 1,
            "price {price} is live and/or archived in more than one place"
        );

        in_bids
            .or(in_asks)
            .or(in_archive)
            .map(PriceLevel::volume)
            .unwrap_or(Shares::ZERO)
    }

    /// The highest resting buy price, if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    /// The lowest resting sell price, if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    /// Cumulative shares matched on this book since it was created.
    pub fn total_volume(&self) -> Shares {
        self.total_volume
    }

    /// The best resting price on the side opposite `side`, i.e. the
    /// price an arrival of `side` would need to cross.
    fn best_opposite_price(&self, side: Side) -> Option<Price> {
        match side {
            Side::Buy => self.best_ask(),
            Side::Sell => self.best_bid(),
        }
    }

    /// An incoming order of `side` at `limit_price` is marketable
    /// against a resting level at `opposite_price` iff the limit
    /// crosses: a buy crosses when its price is at or above the best
    /// ask, a sell when its price is at or below the best bid. Matches
    /// always happen at the resting side's price; the incoming price
    /// only gates whether matching is allowed at all.
    fn is_marketable(side: Side, limit_price: Price, opposite_price: Price) -> bool {
        match side {
            Side::Buy => limit_price >= opposite_price,
            Side::Sell => limit_price <= opposite_price,
        }
    }

    fn take_level(&mut self, side: Side, price: Price) -> Option<PriceLevel> {
        match side {
            Side::Buy => self.bids.remove(&price),
            Side::Sell => self.asks.remove(&price),
        }
    }

    fn put_level(&mut self, side: Side, price: Price, level: PriceLevel) {
        match side {
            Side::Buy => {
                self.bids.insert(price, level);
            }
            Side::Sell => {
                self.asks.insert(price, level);
            }
        }
    }

    /// Rests `order` on `side` at `price`: pushes onto the existing live
    /// level, revives an archived level (preserving its `volume`), or
    /// creates a fresh one. By construction this is only ever called
    /// after the matching loop above has confirmed the opposite side no
    /// longer crosses `price`, so resting never re-enters matching.
    fn rest(&mut self, side: Side, price: Price, order: Order) {
        let order_id = order.id();

        let mut level = match self.take_level(side, price) {
            Some(level) => level,
            None => match self.archive.remove(&price) {
                Some(archived) => PriceLevel::revive(archived),
                None => PriceLevel::new(price),
            },
        };
        level.push(order);
        self.put_level(side, price, level);

        self.order_index.insert(order_id, (side, price));
    }
}
