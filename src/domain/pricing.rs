//! Work-order pricing.
//!
//! The original application recomputed the quote total independently in
//! every screen that displayed it. This module is the single
//! implementation: three fixed price components plus the sum of the
//! selected part lines.

use rust_decimal::{Decimal, RoundingStrategy};

/// Anything that can appear as a priced, toggleable line on a work order.
pub trait PricedLine {
    fn price(&self) -> Decimal;
    fn selected(&self) -> bool;
}

/// Sum of the lines currently marked as selected. Unselected lines never
/// contribute, regardless of their price.
pub fn selected_lines_total<L: PricedLine>(lines: &[L]) -> Decimal {
    lines
        .iter()
        .filter(|line| line.selected())
        .map(PricedLine::price)
        .sum()
}

/// The quote total:
/// `cleaning + reconditioning + turbo + sum(selected part prices)`.
pub fn order_total<L: PricedLine>(
    cleaning_price: Decimal,
    reconditioning_price: Decimal,
    turbo_price: Decimal,
    parts: &[L],
) -> Decimal {
    cleaning_price + reconditioning_price + turbo_price + selected_lines_total(parts)
}

/// Whole-currency display form of an amount (the original UI rendered
/// totals with zero fraction digits). Stored values stay exact.
pub fn display_amount(amount: Decimal) -> String {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Clone)]
    struct Line {
        price: Decimal,
        selected: bool,
    }

    impl PricedLine for Line {
        fn price(&self) -> Decimal {
            self.price
        }
        fn selected(&self) -> bool {
            self.selected
        }
    }

    fn line(price: Decimal, selected: bool) -> Line {
        Line { price, selected }
    }

    #[test]
    fn base_prices_alone() {
        let total = order_total::<Line>(dec!(170), dec!(170), dec!(240), &[]);
        assert_eq!(total, dec!(580));
    }

    #[test]
    fn unselected_lines_do_not_contribute() {
        let parts = vec![line(dec!(450), false), line(dec!(120.50), false)];
        assert_eq!(
            order_total(dec!(170), dec!(170), dec!(240), &parts),
            dec!(580)
        );
    }

    #[test]
    fn toggling_selection_moves_total_by_exactly_the_line_price() {
        let mut parts = vec![line(dec!(450), false), line(dec!(99.90), true)];
        let before = order_total(dec!(0), dec!(0), dec!(0), &parts);
        parts[0].selected = true;
        let after = order_total(dec!(0), dec!(0), dec!(0), &parts);
        assert_eq!(after - before, dec!(450));
    }

    #[test]
    fn display_amount_rounds_half_away_from_zero() {
        assert_eq!(display_amount(dec!(579.5)), "580");
        assert_eq!(display_amount(dec!(579.49)), "579");
        assert_eq!(display_amount(dec!(580)), "580");
    }
}
