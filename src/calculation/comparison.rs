//! Old-vs-new regime comparison.
//!
//! This module runs a calculator under both regimes with the same input and
//! derives NEW-minus-OLD deltas and a recommendation. The two runs share no
//! state, so their order does not matter.

use rust_decimal::Decimal;

use crate::config::TaxRules;
use crate::models::{
    CitComparison, CitInput, CitResult, ComparisonResult, PitComparison, PitInput, PitResult,
    Recommendation, Regime, RegimeComparison, TaxInput,
};

use super::{calculate_cit, calculate_pit};

/// The figures a comparison needs from a per-regime result.
trait RegimeOutcome {
    /// Tax owed under the regime.
    fn tax(&self) -> Decimal;
    /// What the taxpayer keeps for the year.
    fn net(&self) -> Decimal;
    /// What the taxpayer keeps per month.
    fn monthly_net(&self) -> Decimal;
}

impl RegimeOutcome for PitResult {
    fn tax(&self) -> Decimal {
        self.total_tax
    }

    fn net(&self) -> Decimal {
        self.net_income
    }

    fn monthly_net(&self) -> Decimal {
        self.monthly_take_home
    }
}

impl RegimeOutcome for CitResult {
    fn tax(&self) -> Decimal {
        self.cit_payable
    }

    fn net(&self) -> Decimal {
        self.net_profit
    }

    fn monthly_net(&self) -> Decimal {
        self.monthly_net_profit
    }
}

struct Deltas {
    tax: Decimal,
    net: Decimal,
    monthly: Decimal,
    recommendation: Recommendation,
}

fn deltas<R: RegimeOutcome>(old: &R, new: &R) -> Deltas {
    let net = new.net() - old.net();
    Deltas {
        tax: new.tax() - old.tax(),
        net,
        monthly: new.monthly_net() - old.monthly_net(),
        recommendation: Recommendation::from_net_difference(net),
    }
}

/// Compares PIT under both regimes.
pub fn compare_pit(input: &PitInput, rules: &TaxRules) -> RegimeComparison<PitResult, PitComparison> {
    let old = calculate_pit(input, rules.for_regime(Regime::Old));
    let new = calculate_pit(input, rules.for_regime(Regime::New));
    let d = deltas(&old, &new);

    RegimeComparison {
        old,
        new,
        comparison: PitComparison {
            tax_difference: d.tax,
            net_income_difference: d.net,
            monthly_take_home_difference: d.monthly,
            recommendation: d.recommendation,
        },
    }
}

/// Compares CIT under both regimes.
pub fn compare_cit(input: &CitInput, rules: &TaxRules) -> RegimeComparison<CitResult, CitComparison> {
    let old = calculate_cit(input, rules.for_regime(Regime::Old));
    let new = calculate_cit(input, rules.for_regime(Regime::New));
    let d = deltas(&old, &new);

    RegimeComparison {
        old,
        new,
        comparison: CitComparison {
            tax_difference: d.tax,
            net_profit_difference: d.net,
            monthly_profit_difference: d.monthly,
            recommendation: d.recommendation,
        },
    }
}

/// Runs the calculator selected by `input` under both regimes.
///
/// The recommendation is NEW only when the net difference is strictly
/// positive; an exact tie recommends OLD.
///
/// # Examples
///
/// ```
/// use nigeria_tax_engine::calculation::compare_regimes;
/// use nigeria_tax_engine::config::TaxRules;
/// use nigeria_tax_engine::models::{CitInput, Recommendation, TaxInput};
/// use rust_decimal::Decimal;
///
/// let input = TaxInput::Cit(CitInput {
///     turnover: Decimal::from(80_000_000),
///     profit: Decimal::from(10_000_000),
/// });
///
/// let result = compare_regimes(&input, &TaxRules::builtin());
/// assert_eq!(result.recommendation(), Recommendation::NewLaw);
/// assert_eq!(result.tax_difference(), Decimal::from(-200_000));
/// ```
pub fn compare_regimes(input: &TaxInput, rules: &TaxRules) -> ComparisonResult {
    match input {
        TaxInput::Pit(pit) => ComparisonResult::Pit(compare_pit(pit, rules)),
        TaxInput::Cit(cit) => ComparisonResult::Cit(compare_cit(cit, rules)),
    }
}
