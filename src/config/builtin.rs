//! Built-in regime rules.
//!
//! The pre-2026 and 2026 constants, used when no regime directory is
//! configured. `config/regimes/*.yaml` carries the same values.

use rust_decimal::Decimal;

use super::types::{
    Bracket, BracketTable, CitRules, CompanyTier, PitRules, RegimeRules, ReliefRule, TaxRules,
    TierTable,
};
use crate::models::Regime;

/// Housing allowance ceiling introduced by the 2026 law.
pub const HOUSING_ALLOWANCE_CAP: Decimal = Decimal::from_parts(500_000, 0, 0, false, 0);

fn naira(amount: i64) -> Decimal {
    Decimal::from(amount)
}

fn percent(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn tier(name: &str, max_turnover: Option<i64>, rate: Decimal) -> CompanyTier {
    CompanyTier {
        name: name.to_string(),
        max_turnover: max_turnover.map(naira),
        rate,
    }
}

/// Pre-2026 Personal and Company Income Tax rules.
pub fn old_regime() -> RegimeRules {
    RegimeRules {
        regime: Regime::Old,
        description: "Pre-2026 Personal Income Tax Act and Companies Income Tax Act".to_string(),
        pit: PitRules {
            relief: ReliefRule {
                gross_income_rate: percent(1),
                fixed_amount: naira(200_000),
            },
            housing_allowance_cap: None,
            capital_gains_rate: percent(5),
            brackets: BracketTable::from_validated(vec![
                Bracket::bounded(naira(300_000), percent(7)),
                Bracket::bounded(naira(600_000), percent(11)),
                Bracket::bounded(naira(1_100_000), percent(15)),
                Bracket::bounded(naira(1_600_000), percent(19)),
                Bracket::bounded(naira(3_200_000), percent(21)),
                Bracket::unbounded(percent(24)),
            ]),
        },
        cit: CitRules {
            tiers: TierTable::from_validated(vec![
                tier("Small Company", Some(25_000_000), Decimal::ZERO),
                tier("Medium Company", Some(100_000_000), percent(20)),
                tier("Large Company", None, percent(30)),
            ]),
        },
    }
}

/// 2026 Personal and Company Income Tax rules.
pub fn new_regime() -> RegimeRules {
    RegimeRules {
        regime: Regime::New,
        description: "2026 Nigeria Tax Act".to_string(),
        pit: PitRules {
            relief: ReliefRule {
                gross_income_rate: percent(20),
                fixed_amount: naira(200_000),
            },
            housing_allowance_cap: Some(HOUSING_ALLOWANCE_CAP),
            capital_gains_rate: percent(10),
            brackets: BracketTable::from_validated(vec![
                Bracket::bounded(naira(800_000), Decimal::ZERO),
                Bracket::bounded(naira(3_200_000), percent(15)),
                Bracket::bounded(naira(7_200_000), percent(25)),
                Bracket::bounded(naira(12_200_000), percent(30)),
                Bracket::bounded(naira(22_200_000), percent(35)),
                Bracket::unbounded(percent(40)),
            ]),
        },
        cit: CitRules {
            tiers: TierTable::from_validated(vec![
                tier("Small Company", Some(50_000_000), Decimal::ZERO),
                tier("Medium Company", Some(150_000_000), percent(18)),
                tier("Large Company", None, percent(25)),
            ]),
        },
    }
}

impl TaxRules {
    /// Returns the built-in pre-2026 and 2026 rules.
    ///
    /// # Example
    ///
    /// ```
    /// use nigeria_tax_engine::config::TaxRules;
    /// use nigeria_tax_engine::models::Regime;
    ///
    /// let rules = TaxRules::builtin();
    /// assert_eq!(rules.for_regime(Regime::New).pit.brackets.brackets().len(), 6);
    /// ```
    pub fn builtin() -> Self {
        Self::from_validated(old_regime(), new_regime())
    }
}
