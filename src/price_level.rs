//! A single price's FIFO queue of resting orders, plus its aggregate
//! depth and cumulative traded volume.

use crate::error::PriceLevelError;
use crate::execution::ExecutionReport;
use crate::order::Order;
use crate::primitives::{OrderId, Price, Shares};
use std::collections::VecDeque;
use tracing::trace;

/// An ordered FIFO queue of orders sharing a single limit price.
///
/// `depth` is always `== Σ queue[i].shares`; `volume` is the cumulative
/// shares ever executed at this level and only ever grows, including
/// across the level being emptied and archived and later revived (see
/// [`crate::OrderBook`]'s archive).
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: Price,
    queue: VecDeque<Order>,
    depth: Shares,
    volume: Shares,
}

impl PriceLevel {
    /// A fresh, empty level at `price`.
    pub(crate) fn new(price: Price) -> Self {
        PriceLevel {
            price,
            queue: VecDeque::new(),
            depth: Shares::ZERO,
            volume: Shares::ZERO,
        }
    }

    /// Re-opens an archived level, preserving its historical `volume`.
    pub(crate) fn revive(mut archived: PriceLevel) -> PriceLevel {
        debug_assert!(archived.queue.is_empty());
        debug_assert!(archived.depth.is_zero());
        archived.queue = VecDeque::new();
        archived
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn depth(&self) -> Shares {
        self.depth
    }

    pub fn volume(&self) -> Shares {
        self.volume
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_zero()
    }

    /// Appends `order` to the back of the queue.
    ///
    /// Precondition: `order.limit_price() == self.price()`; a violation
    /// is a programmer error, checked with `debug_assert!`.
    pub(crate) fn push(&mut self, order: Order) {
        debug_assert_eq!(order.limit_price(), self.price);
        self.depth += order.shares();
        self.queue.push_back(order);
    }

    /// Unlinks the resting order with id `order_id` from the queue,
    /// wherever it sits in the FIFO line, and returns it.
    ///
    /// This core indexes orders by id at the [`crate::OrderBook`] layer
    /// (not by a stable position locator into this queue), so removal
    /// here is a linear scan over the level's resting orders. See
    /// `DESIGN.md` for why this trades the classic O(1)-locator design
    /// for a simpler eager scan.
    pub(crate) fn remove(&mut self, order_id: OrderId) -> Option<Order> {
        let position = self.queue.iter().position(|o| o.id() == order_id)?;
        let order = self.queue.remove(position)?;
        self.depth -= order.shares();
        Some(order)
    }

    /// Consumes up to `n` shares from the front of the queue, in strict
    /// arrival order.
    ///
    /// At most one resting order is left partially filled, and it is
    /// always the last one touched. Fails with
    /// [`PriceLevelError::InsufficientDepth`] if `n > depth` at entry.
    pub(crate) fn match_shares(
        &mut self,
        base_id: OrderId,
        n: Shares,
    ) -> Result<ExecutionReport, PriceLevelError> {
        if n > self.depth {
            return Err(PriceLevelError::InsufficientDepth {
                requested: n,
                available: self.depth,
            });
        }

        let mut report = ExecutionReport::new(base_id);
        let mut remaining = n;

        while !remaining.is_zero() {
            let head = self
                .queue
                .front_mut()
                .expect("depth positive but queue empty: depth/queue invariant violated");
            let take = remaining.min(head.shares());
            let head_id = head.id();
            let (consumed, fully_filled) = head.execute(take);

            if fully_filled {
                report.record_full_fill(head_id, self.price, consumed);
                self.queue.pop_front();
            } else {
                report.record_partial_fill(head_id, self.price, consumed);
            }

            remaining -= consumed;
        }

        self.depth -= report.shares_executed();
        self.volume += report.shares_executed();
        trace!(
            price = self.price.get(),
            executed = report.shares_executed().get(),
            remaining_depth = self.depth.get(),
            "matched shares at price level"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Side, TimeInForce};

    fn resting(id: u64, shares: u64, price: u64) -> Order {
        Order::new(
            OrderId::new(id),
            Side::Sell,
            Shares::new(shares),
            Price::new(price),
            TimeInForce::GOOD_TILL_CANCELLED,
        )
    }

    #[test]
    fn push_accumulates_depth() {
        let mut level = PriceLevel::new(Price::new(10));
        level.push(resting(1, 5, 10));
        level.push(resting(2, 7, 10));
        assert_eq!(level.depth(), Shares::new(12));
    }

    #[test]
    fn match_shares_consumes_fifo_and_leaves_one_partial() {
        let mut level = PriceLevel::new(Price::new(10));
        level.push(resting(1, 5, 10));
        level.push(resting(2, 5, 10));

        let report = level.match_shares(OrderId::new(99), Shares::new(7)).unwrap();

        assert_eq!(report.fully_filled(), &[OrderId::new(1)]);
        assert_eq!(report.partial(), Some((OrderId::new(2), Shares::new(2))));
        assert_eq!(report.shares_executed(), Shares::new(7));
        assert_eq!(report.money_exchanged().get(), 70);
        assert_eq!(level.depth(), Shares::new(3));
        assert_eq!(level.volume(), Shares::new(7));
    }

    #[test]
    fn match_shares_rejects_overdraw() {
        let mut level = PriceLevel::new(Price::new(10));
        level.push(resting(1, 5, 10));
        let err = level.match_shares(OrderId::new(99), Shares::new(6)).unwrap_err();
        assert_eq!(
            err,
            PriceLevelError::InsufficientDepth {
                requested: Shares::new(6),
                available: Shares::new(5)
            }
        );
    }

    #[test]
    fn remove_updates_depth_and_returns_order() {
        let mut level = PriceLevel::new(Price::new(10));
        level.push(resting(1, 5, 10));
        level.push(resting(2, 7, 10));

        let removed = level.remove(OrderId::new(1)).unwrap();
        assert_eq!(removed.id(), OrderId::new(1));
        assert_eq!(level.depth(), Shares::new(7));
        assert!(level.remove(OrderId::new(1)).is_none());
    }

    #[test]
    fn volume_survives_emptying_and_revival() {
        let mut level = PriceLevel::new(Price::new(10));
        level.push(resting(1, 5, 10));
        level.match_shares(OrderId::new(99), Shares::new(5)).unwrap();
        assert!(level.is_empty());
        assert_eq!(level.volume(), Shares::new(5));

        let mut revived = PriceLevel::revive(level);
        revived.push(resting(2, 3, 10));
        assert_eq!(revived.volume(), Shares::new(5));
        assert_eq!(revived.depth(), Shares::new(3));
    }
}
