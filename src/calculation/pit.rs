//! Personal Income Tax calculation.
//!
//! This module applies one regime's [`PitRules`] to a [`PitInput`]: housing
//! cap, Consolidated Relief Allowance, bracket tax and flat capital-gains tax.

use rust_decimal::Decimal;

use crate::config::RegimeRules;
use crate::models::{PitInput, PitResult};

use super::{MONTHS_PER_YEAR, compute_progressive_tax};

/// Calculates PIT for one individual under one regime.
///
/// 1. Housing allowance is capped when the regime defines a cap.
/// 2. Gross income is basic salary plus capped housing, transport and other
///    allowances. Gains are excluded.
/// 3. CRA comes from the regime's relief formula.
/// 4. Taxable income is gross less CRA and deductions, floored at zero.
/// 5. PAYE is the bracket tax on taxable income.
/// 6. Capital-gains tax is a flat rate on capital plus digital-asset gains.
/// 7. Net income adds the gains back and subtracts total tax.
///
/// # Examples
///
/// ```
/// use nigeria_tax_engine::calculation::calculate_pit;
/// use nigeria_tax_engine::config::TaxRules;
/// use nigeria_tax_engine::models::{PitInput, Regime};
/// use rust_decimal::Decimal;
///
/// let input = PitInput {
///     basic_salary: Decimal::from(1_000_000),
///     housing_allowance: Decimal::from(600_000),
///     ..PitInput::default()
/// };
/// let rules = TaxRules::builtin();
///
/// let result = calculate_pit(&input, rules.for_regime(Regime::New));
/// assert_eq!(result.housing_allowance_capped, Decimal::from(500_000));
/// assert_eq!(result.annual_paye, Decimal::from(30_000));
/// assert_eq!(result.net_income, Decimal::from(1_470_000));
/// ```
pub fn calculate_pit(input: &PitInput, rules: &RegimeRules) -> PitResult {
    let pit = &rules.pit;
    let months = Decimal::from(MONTHS_PER_YEAR);

    let housing = pit.effective_housing(input.housing_allowance);
    let gross_income =
        input.basic_salary + housing + input.transport_allowance + input.other_allowances;

    let cra = pit.relief.amount(gross_income);
    let taxable_income = (gross_income - cra - input.deductions()).max(Decimal::ZERO);

    let annual_paye = compute_progressive_tax(taxable_income, &pit.brackets);
    let capital_gains_tax = input.total_gains() * pit.capital_gains_rate;
    let total_tax = annual_paye + capital_gains_tax;
    let net_income = gross_income + input.total_gains() - total_tax;

    PitResult {
        law: rules.regime,
        gross_income,
        cra,
        taxable_income,
        annual_paye,
        monthly_paye: annual_paye / months,
        capital_gains_tax,
        total_tax,
        net_income,
        monthly_take_home: net_income / months,
        housing_allowance_capped: housing,
        housing_raw: input.housing_allowance,
        first_tax_free: pit.brackets.tax_free_threshold(),
    }
}
