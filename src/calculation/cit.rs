//! Company Income Tax calculation.

use rust_decimal::Decimal;

use crate::config::RegimeRules;
use crate::models::{CitInput, CitResult};

use super::MONTHS_PER_YEAR;

/// Calculates CIT for one company under one regime.
///
/// The company-size tier is picked from turnover (inclusive ceilings) and its
/// rate applied to profit. Profit is not floored: a loss yields a negative
/// `cit_payable`, which callers treat as zero liability.
///
/// # Examples
///
/// ```
/// use nigeria_tax_engine::calculation::calculate_cit;
/// use nigeria_tax_engine::config::TaxRules;
/// use nigeria_tax_engine::models::{CitInput, Regime};
/// use rust_decimal::Decimal;
///
/// let input = CitInput {
///     turnover: Decimal::from(80_000_000),
///     profit: Decimal::from(10_000_000),
/// };
/// let rules = TaxRules::builtin();
///
/// let result = calculate_cit(&input, rules.for_regime(Regime::Old));
/// assert_eq!(result.company_size, "Medium Company");
/// assert_eq!(result.cit_payable, Decimal::from(2_000_000));
/// ```
pub fn calculate_cit(input: &CitInput, rules: &RegimeRules) -> CitResult {
    let tier = rules.cit.tiers.lookup(input.turnover);

    let cit_payable = input.profit * tier.rate;
    let net_profit = input.profit - cit_payable;

    CitResult {
        law: rules.regime,
        company_size: tier.name.clone(),
        turnover: input.turnover,
        profit: input.profit,
        cit_rate: tier.rate * Decimal::ONE_HUNDRED,
        cit_payable,
        net_profit,
        monthly_net_profit: net_profit / Decimal::from(MONTHS_PER_YEAR),
    }
}
