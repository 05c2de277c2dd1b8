//! Progressive bracket tax.
//!
//! This module integrates a marginal [`BracketTable`] over an amount. Each
//! bracket's rate applies only to the slice of income between the previous
//! bound and its own.

use rust_decimal::Decimal;

use crate::config::BracketTable;

/// Computes marginal-rate tax on `amount`.
///
/// Brackets are walked in ascending order. For each one, the slice
/// `min(amount, upper_bound) - previous_bound` is taxed at the bracket's rate;
/// the walk stops once `amount` no longer exceeds the previous bound. The
/// unbounded final bracket takes everything above the last finite bound.
///
/// The function makes no assumption about a 0% first bracket; a tax-free
/// band is simply a bracket whose rate is zero.
///
/// # Examples
///
/// ```
/// use nigeria_tax_engine::calculation::compute_progressive_tax;
/// use nigeria_tax_engine::config::{Bracket, BracketTable};
/// use rust_decimal::Decimal;
///
/// let table = BracketTable::new(vec![
///     Bracket::bounded(Decimal::from(800_000), Decimal::ZERO),
///     Bracket::unbounded(Decimal::new(15, 2)),
/// ])
/// .unwrap();
///
/// // 200,000 above the tax-free band at 15%.
/// assert_eq!(compute_progressive_tax(Decimal::from(1_000_000), &table), Decimal::from(30_000));
/// assert_eq!(compute_progressive_tax(Decimal::ZERO, &table), Decimal::ZERO);
/// ```
pub fn compute_progressive_tax(amount: Decimal, brackets: &BracketTable) -> Decimal {
    let mut tax = Decimal::ZERO;
    let mut previous_bound = Decimal::ZERO;

    for bracket in brackets.brackets() {
        if amount <= previous_bound {
            break;
        }
        let ceiling = match bracket.upper_bound {
            Some(bound) => amount.min(bound),
            None => amount,
        };
        tax += (ceiling - previous_bound) * bracket.rate;

        match bracket.upper_bound {
            Some(bound) => previous_bound = bound,
            None => break,
        }
    }

    tax
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bracket;
    use crate::config::builtin::{new_regime, old_regime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn old_table() -> BracketTable {
        old_regime().pit.brackets
    }

    fn new_table() -> BracketTable {
        new_regime().pit.brackets
    }

    #[test]
    fn test_zero_amount_yields_zero() {
        assert_eq!(compute_progressive_tax(Decimal::ZERO, &old_table()), Decimal::ZERO);
        assert_eq!(compute_progressive_tax(Decimal::ZERO, &new_table()), Decimal::ZERO);
    }

    #[test]
    fn test_old_table_taxes_from_first_naira() {
        // 100,000 at 7%
        assert_eq!(compute_progressive_tax(dec("100000"), &old_table()), dec("7000"));
    }

    #[test]
    fn test_new_table_tax_free_band() {
        assert_eq!(compute_progressive_tax(dec("800000"), &new_table()), Decimal::ZERO);
        // 1 naira above the band at 15%
        assert_eq!(compute_progressive_tax(dec("800001"), &new_table()), dec("0.15"));
    }

    #[test]
    fn test_old_table_exact_bracket_boundaries() {
        // 300,000 x 7% = 21,000
        assert_eq!(compute_progressive_tax(dec("300000"), &old_table()), dec("21000"));
        // + 300,000 x 11% = 54,000
        assert_eq!(compute_progressive_tax(dec("600000"), &old_table()), dec("54000"));
        // + 500,000 x 15% = 129,000
        assert_eq!(compute_progressive_tax(dec("1100000"), &old_table()), dec("129000"));
        // + 500,000 x 19% = 224,000
        assert_eq!(compute_progressive_tax(dec("1600000"), &old_table()), dec("224000"));
        // + 1,600,000 x 21% = 560,000
        assert_eq!(compute_progressive_tax(dec("3200000"), &old_table()), dec("560000"));
    }

    #[test]
    fn test_old_table_top_bracket() {
        // 560,000 + 800,000 x 24% = 752,000
        assert_eq!(compute_progressive_tax(dec("4000000"), &old_table()), dec("752000"));
    }

    #[test]
    fn test_new_table_every_bracket() {
        // 2,400,000 x 15% = 360,000
        assert_eq!(compute_progressive_tax(dec("3200000"), &new_table()), dec("360000"));
        // + 4,000,000 x 25% = 1,360,000
        assert_eq!(compute_progressive_tax(dec("7200000"), &new_table()), dec("1360000"));
        // + 5,000,000 x 30% = 2,860,000
        assert_eq!(compute_progressive_tax(dec("12200000"), &new_table()), dec("2860000"));
        // + 10,000,000 x 35% = 6,360,000
        assert_eq!(compute_progressive_tax(dec("22200000"), &new_table()), dec("6360000"));
        // + 7,800,000 x 40% = 9,480,000
        assert_eq!(compute_progressive_tax(dec("30000000"), &new_table()), dec("9480000"));
    }

    #[test]
    fn test_amount_far_beyond_last_bound_uses_final_rate() {
        let table = BracketTable::new(vec![
            Bracket::bounded(dec("100"), dec("0.1")),
            Bracket::unbounded(dec("0.5")),
        ])
        .unwrap();

        // 10 + (1,000,100 - 100) x 0.5
        assert_eq!(compute_progressive_tax(dec("1000100"), &table), dec("500010"));
    }

    #[test]
    fn test_single_unbounded_bracket_is_flat_tax() {
        let table = BracketTable::new(vec![Bracket::unbounded(dec("0.25"))]).unwrap();
        assert_eq!(compute_progressive_tax(dec("4000"), &table), dec("1000"));
    }

    #[test]
    fn test_fractional_amount() {
        // 0.5 x 7%
        assert_eq!(compute_progressive_tax(dec("0.5"), &old_table()), dec("0.035"));
    }
}
