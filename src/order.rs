//! A single resting or arriving order.

use crate::primitives::{OrderId, Price, Shares, Side, TimeInForce};

/// An immutable descriptor plus a mutable residual share count.
///
/// A resting `Order` always has `shares > 0`; the moment a match drives
/// `shares` to zero the order is removed from its [`crate::PriceLevel`]
/// in the same step that decremented it (see
/// [`crate::PriceLevel::match_shares`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    side: Side,
    shares: Shares,
    limit_price: Price,
    time_in_force: TimeInForce,
}

impl Order {
    pub(crate) fn new(
        id: OrderId,
        side: Side,
        shares: Shares,
        limit_price: Price,
        time_in_force: TimeInForce,
    ) -> Self {
        Order {
            id,
            side,
            shares,
            limit_price,
            time_in_force,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn shares(&self) -> Shares {
        self.shares
    }

    pub fn limit_price(&self) -> Price {
        self.limit_price
    }

    pub fn time_in_force(&self) -> TimeInForce {
        self.time_in_force
    }

    /// Decrements `shares` by `min(shares, up_to_shares)`.
    ///
    /// Returns the amount decremented and whether the order is now fully
    /// consumed (`shares == 0`). This is the only mutator of `shares` on
    /// a resting order; it has no error path.
    pub(crate) fn execute(&mut self, up_to_shares: Shares) -> (Shares, bool) {
        let consumed = self.shares.min(up_to_shares);
        self.shares -= consumed;
        (consumed, self.shares.is_zero())
    }

    /// Produces a detached order with identical identity, side, price and
    /// time-in-force, but `shares = n`. Used when a partially-matched
    /// arriving order is rested with only its remainder.
    pub(crate) fn clone_with_shares(&self, n: Shares) -> Order {
        Order {
            id: self.id,
            side: self.side,
            shares: n,
            limit_price: self.limit_price,
            time_in_force: self.time_in_force,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(shares: u64) -> Order {
        Order::new(
            OrderId::new(1),
            Side::Buy,
            Shares::new(shares),
            Price::new(10),
            TimeInForce::GOOD_TILL_CANCELLED,
        )
    }

    #[test]
    fn execute_partially_consumes() {
        let mut o = order(10);
        let (consumed, fully_filled) = o.execute(Shares::new(4));
        assert_eq!(consumed, Shares::new(4));
        assert!(!fully_filled);
        assert_eq!(o.shares(), Shares::new(6));
    }

    #[test]
    fn execute_clamps_to_remaining_shares() {
        let mut o = order(5);
        let (consumed, fully_filled) = o.execute(Shares::new(100));
        assert_eq!(consumed, Shares::new(5));
        assert!(fully_filled);
        assert_eq!(o.shares(), Shares::ZERO);
    }

    #[test]
    fn clone_with_shares_preserves_identity() {
        let o = order(10);
        let remainder = o.clone_with_shares(Shares::new(3));
        assert_eq!(remainder.id(), o.id());
        assert_eq!(remainder.side(), o.side());
        assert_eq!(remainder.limit_price(), o.limit_price());
        assert_eq!(remainder.shares(), Shares::new(3));
    }
}
