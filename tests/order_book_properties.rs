//! Property tests over randomized order sequences: the book must never
//! end up crossed at rest, and `total_volume` must track the sum of
//! every report's `shares_executed` exactly.

use clob_core::{OrderBook, Price, Shares, Side, TimeInForce};
use proptest::prelude::*;

fn arb_order() -> impl Strategy<Value = (Side, u64, u64)> {
    (
        prop_oneof![Just(Side::Buy), Just(Side::Sell)],
        1u64..50,
        1u64..20,
    )
}

proptest! {
    #[test]
    fn book_never_crossed_at_rest_and_volume_tracks_reports(orders in prop::collection::vec(arb_order(), 0..200)) {
        let mut book = OrderBook::new();
        let mut expected_total = Shares::ZERO;

        for (side, shares, price) in orders {
            let report = book
                .submit(side, Shares::new(shares), Price::new(price), TimeInForce::GOOD_TILL_CANCELLED)
                .expect("all generated orders have positive shares, positive price, and GTC tif");
            expected_total += report.shares_executed();

            if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
                prop_assert!(bid < ask, "book rested crossed: best_bid {bid} >= best_ask {ask}");
            }
        }

        prop_assert_eq!(book.total_volume(), expected_total);
    }

    #[test]
    fn depth_never_exceeds_what_was_submitted_on_a_side(orders in prop::collection::vec(arb_order(), 0..100)) {
        let mut book = OrderBook::new();
        let mut submitted_buy = Shares::ZERO;
        let mut submitted_sell = Shares::ZERO;

        for (side, shares, price) in orders {
            match side {
                Side::Buy => submitted_buy += Shares::new(shares),
                Side::Sell => submitted_sell += Shares::new(shares),
            }
            book.submit(side, Shares::new(shares), Price::new(price), TimeInForce::GOOD_TILL_CANCELLED)
                .unwrap();
        }

        prop_assert!(book.total_volume() <= submitted_buy);
        prop_assert!(book.total_volume() <= submitted_sell);
    }
}
