//! Configuration types for regime rules.
//!
//! This module contains the strongly-typed rule bundles that parameterize the
//! calculators. They are deserialized from YAML regime files or built from
//! the constants in [`super::builtin`]. Table invariants are checked on
//! construction, so a loaded [`BracketTable`] or [`TierTable`] is always
//! usable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Regime;

fn check_unit_rate(rate: Decimal, what: &str) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(EngineError::invalid_config(format!(
            "{} rate {} is outside [0, 1]",
            what, rate
        )));
    }
    Ok(())
}

fn check_non_negative(amount: Decimal, what: &str) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::invalid_config(format!(
            "{} {} is negative",
            what, amount
        )));
    }
    Ok(())
}

/// One marginal bracket: income above the previous bound and up to
/// `upper_bound` is taxed at `rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    /// Inclusive upper bound. `None` means unbounded.
    pub upper_bound: Option<Decimal>,
    /// Marginal rate as a fraction in [0, 1].
    pub rate: Decimal,
}

impl Bracket {
    /// A bracket ending at `upper_bound`.
    pub fn bounded(upper_bound: Decimal, rate: Decimal) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    /// The final, unbounded bracket.
    pub fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}

/// An ordered, validated list of marginal brackets.
///
/// Bounds are strictly increasing from zero, only the last bracket is
/// unbounded, and every rate lies in [0, 1].
///
/// # Example
///
/// ```
/// use nigeria_tax_engine::config::{Bracket, BracketTable};
/// use rust_decimal::Decimal;
///
/// let table = BracketTable::new(vec![
///     Bracket::bounded(Decimal::from(800_000), Decimal::ZERO),
///     Bracket::unbounded(Decimal::new(15, 2)),
/// ])
/// .unwrap();
/// assert_eq!(table.tax_free_threshold(), Decimal::from(800_000));
///
/// // A table must end with an unbounded bracket.
/// assert!(BracketTable::new(vec![Bracket::bounded(Decimal::ONE, Decimal::ZERO)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bracket>", into = "Vec<Bracket>")]
pub struct BracketTable {
    brackets: Vec<Bracket>,
}

impl BracketTable {
    /// Validates and wraps a bracket list.
    pub fn new(brackets: Vec<Bracket>) -> EngineResult<Self> {
        let Some((last, bounded)) = brackets.split_last() else {
            return Err(EngineError::invalid_config("bracket table is empty"));
        };

        let mut previous = Decimal::ZERO;
        for (index, bracket) in bounded.iter().enumerate() {
            check_unit_rate(bracket.rate, &format!("bracket {}", index + 1))?;
            let Some(bound) = bracket.upper_bound else {
                return Err(EngineError::invalid_config(format!(
                    "bracket {} is unbounded but is not the last bracket",
                    index + 1
                )));
            };
            if bound <= previous {
                return Err(EngineError::invalid_config(format!(
                    "bracket {} upper bound {} does not exceed previous bound {}",
                    index + 1,
                    bound,
                    previous
                )));
            }
            previous = bound;
        }

        check_unit_rate(last.rate, "final bracket")?;
        if last.upper_bound.is_some() {
            return Err(EngineError::invalid_config(
                "final bracket must be unbounded",
            ));
        }

        Ok(Self { brackets })
    }

    /// Wraps brackets already known to satisfy the table invariants.
    pub(crate) fn from_validated(brackets: Vec<Bracket>) -> Self {
        Self { brackets }
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    /// Returns the income covered by a leading 0% bracket, or zero when the
    /// first bracket carries a positive rate.
    pub fn tax_free_threshold(&self) -> Decimal {
        match self.brackets.first() {
            Some(Bracket {
                upper_bound: Some(bound),
                rate,
            }) if rate.is_zero() => *bound,
            _ => Decimal::ZERO,
        }
    }
}

impl TryFrom<Vec<Bracket>> for BracketTable {
    type Error = EngineError;

    fn try_from(brackets: Vec<Bracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl From<BracketTable> for Vec<Bracket> {
    fn from(table: BracketTable) -> Self {
        table.brackets
    }
}

/// Consolidated Relief Allowance formula: `gross_income_rate * gross +
/// fixed_amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefRule {
    /// Share of gross income granted as relief.
    pub gross_income_rate: Decimal,
    /// Flat relief added on top.
    pub fixed_amount: Decimal,
}

impl ReliefRule {
    /// Computes the relief for a gross income.
    pub fn amount(&self, gross_income: Decimal) -> Decimal {
        self.gross_income_rate * gross_income + self.fixed_amount
    }
}

/// Personal income tax rules for one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitRules {
    /// Consolidated Relief Allowance formula.
    pub relief: ReliefRule,
    /// Ceiling on the housing allowance counted in gross income. `None`
    /// means the allowance is used as submitted.
    #[serde(default)]
    pub housing_allowance_cap: Option<Decimal>,
    /// Flat rate on capital and digital-asset gains.
    pub capital_gains_rate: Decimal,
    /// Marginal brackets applied to taxable income.
    pub brackets: BracketTable,
}

impl PitRules {
    /// Applies the housing cap, if any.
    pub fn effective_housing(&self, raw: Decimal) -> Decimal {
        match self.housing_allowance_cap {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    }

    fn validate(&self) -> EngineResult<()> {
        check_unit_rate(self.relief.gross_income_rate, "relief")?;
        check_non_negative(self.relief.fixed_amount, "relief fixed amount")?;
        check_unit_rate(self.capital_gains_rate, "capital gains")?;
        if let Some(cap) = self.housing_allowance_cap {
            check_non_negative(cap, "housing allowance cap")?;
        }
        Ok(())
    }
}

/// A company-size tier selected by turnover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyTier {
    /// Tier name, e.g. "Small Company".
    pub name: String,
    /// Inclusive turnover ceiling. `None` means unbounded.
    pub max_turnover: Option<Decimal>,
    /// CIT rate as a fraction in [0, 1].
    pub rate: Decimal,
}

impl CompanyTier {
    /// Returns true if `turnover` falls at or below this tier's ceiling.
    pub fn covers(&self, turnover: Decimal) -> bool {
        self.max_turnover.is_none_or(|max| turnover <= max)
    }
}

/// An ordered, validated list of company-size tiers.
///
/// Ceilings are strictly increasing and inclusive, so a turnover exactly on a
/// ceiling belongs to the lower tier. The last tier is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CompanyTier>", into = "Vec<CompanyTier>")]
pub struct TierTable {
    tiers: Vec<CompanyTier>,
}

impl TierTable {
    /// Validates and wraps a tier list.
    pub fn new(tiers: Vec<CompanyTier>) -> EngineResult<Self> {
        let Some((last, bounded)) = tiers.split_last() else {
            return Err(EngineError::invalid_config("tier table is empty"));
        };

        let mut previous: Option<Decimal> = None;
        for tier in bounded {
            check_unit_rate(tier.rate, &format!("tier '{}'", tier.name))?;
            let Some(max) = tier.max_turnover else {
                return Err(EngineError::invalid_config(format!(
                    "tier '{}' is unbounded but is not the last tier",
                    tier.name
                )));
            };
            check_non_negative(max, &format!("tier '{}' ceiling", tier.name))?;
            if previous.is_some_and(|p| max <= p) {
                return Err(EngineError::invalid_config(format!(
                    "tier '{}' ceiling {} does not exceed the previous ceiling",
                    tier.name, max
                )));
            }
            previous = Some(max);
        }

        check_unit_rate(last.rate, &format!("tier '{}'", last.name))?;
        if last.max_turnover.is_some() {
            return Err(EngineError::invalid_config("final tier must be unbounded"));
        }

        Ok(Self { tiers })
    }

    /// Wraps tiers already known to satisfy the table invariants.
    pub(crate) fn from_validated(tiers: Vec<CompanyTier>) -> Self {
        Self { tiers }
    }

    /// Returns the tiers in ascending order.
    pub fn tiers(&self) -> &[CompanyTier] {
        &self.tiers
    }

    /// Finds the first tier whose ceiling covers `turnover`.
    pub fn lookup(&self, turnover: Decimal) -> &CompanyTier {
        let index = self
            .tiers
            .iter()
            .position(|tier| tier.covers(turnover))
            .unwrap_or(self.tiers.len() - 1);
        &self.tiers[index]
    }
}

impl TryFrom<Vec<CompanyTier>> for TierTable {
    type Error = EngineError;

    fn try_from(tiers: Vec<CompanyTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<TierTable> for Vec<CompanyTier> {
    fn from(table: TierTable) -> Self {
        table.tiers
    }
}

/// Company income tax rules for one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitRules {
    /// Turnover tiers, smallest first.
    pub tiers: TierTable,
}

/// The complete rule bundle for one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeRules {
    /// Which regime this bundle describes.
    pub regime: Regime,
    /// Human-readable description of the law.
    pub description: String,
    /// Personal income tax rules.
    pub pit: PitRules,
    /// Company income tax rules.
    pub cit: CitRules,
}

impl RegimeRules {
    /// Checks the scalar rule values. Tables validate themselves.
    pub fn validate(&self) -> EngineResult<()> {
        self.pit.validate()
    }
}

/// Rule bundles for both regimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxRules {
    old: RegimeRules,
    new: RegimeRules,
}

impl TaxRules {
    /// Pairs two bundles, checking each sits in the matching slot.
    pub fn new(old: RegimeRules, new: RegimeRules) -> EngineResult<Self> {
        for (expected, rules) in [(Regime::Old, &old), (Regime::New, &new)] {
            if rules.regime != expected {
                return Err(EngineError::invalid_config(format!(
                    "expected {} rules but found {}",
                    expected, rules.regime
                )));
            }
            rules.validate()?;
        }
        Ok(Self { old, new })
    }

    /// Pairs bundles already known to be valid and correctly slotted.
    pub(crate) fn from_validated(old: RegimeRules, new: RegimeRules) -> Self {
        Self { old, new }
    }

    /// Returns the bundle for `regime`.
    pub fn for_regime(&self, regime: Regime) -> &RegimeRules {
        match regime {
            Regime::Old => &self.old,
            Regime::New => &self.new,
        }
    }

    /// Returns the pre-2026 rules.
    pub fn old_rules(&self) -> &RegimeRules {
        &self.old
    }

    /// Returns the 2026 rules.
    pub fn new_rules(&self) -> &RegimeRules {
        &self.new
    }
}
