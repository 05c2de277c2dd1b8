//! Comparison result models.
//!
//! This module contains the old-vs-new [`ComparisonResult`] and the
//! [`CalculationResponse`] envelope returned by the `/calculate` endpoint.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CitResult, PitResult, TaxType};

/// Which regime leaves the taxpayer better off.
///
/// # Example
///
/// ```
/// use nigeria_tax_engine::models::Recommendation;
/// use rust_decimal::Decimal;
///
/// assert_eq!(Recommendation::from_net_difference(Decimal::ONE), Recommendation::NewLaw);
/// assert_eq!(Recommendation::from_net_difference(Decimal::ZERO), Recommendation::OldLaw);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Net figure is strictly higher under the 2026 law.
    #[serde(rename = "Better under NEW law")]
    NewLaw,
    /// Net figure is equal or higher under the pre-2026 law.
    #[serde(rename = "Better under OLD law")]
    OldLaw,
}

impl Recommendation {
    /// Picks NEW only when `new - old` net is strictly positive. A tie
    /// resolves to OLD.
    pub fn from_net_difference(net_difference: Decimal) -> Self {
        if net_difference > Decimal::ZERO {
            Recommendation::NewLaw
        } else {
            Recommendation::OldLaw
        }
    }

    /// Returns the text shown to users.
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::NewLaw => "Better under NEW law",
            Recommendation::OldLaw => "Better under OLD law",
        }
    }
}

/// PIT deltas, each computed as NEW minus OLD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitComparison {
    /// Difference in total tax.
    pub tax_difference: Decimal,
    /// Difference in net income.
    pub net_income_difference: Decimal,
    /// Difference in monthly take-home pay.
    pub monthly_take_home_difference: Decimal,
    /// Which regime is better for the taxpayer.
    pub recommendation: Recommendation,
}

/// CIT deltas, each computed as NEW minus OLD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitComparison {
    /// Difference in CIT payable.
    pub tax_difference: Decimal,
    /// Difference in net profit.
    pub net_profit_difference: Decimal,
    /// Difference in monthly net profit.
    pub monthly_profit_difference: Decimal,
    /// Which regime is better for the company.
    pub recommendation: Recommendation,
}

/// Results under both regimes plus their comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison<R, D> {
    /// Result under the pre-2026 law.
    pub old: R,
    /// Result under the 2026 law.
    pub new: R,
    /// NEW-minus-OLD deltas and recommendation.
    pub comparison: D,
}

/// An old-vs-new comparison for either tax type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonResult {
    /// Personal income tax comparison.
    Pit(RegimeComparison<PitResult, PitComparison>),
    /// Company income tax comparison.
    Cit(RegimeComparison<CitResult, CitComparison>),
}

impl ComparisonResult {
    /// Returns the tax type that was compared.
    pub fn tax_type(&self) -> TaxType {
        match self {
            ComparisonResult::Pit(_) => TaxType::Pit,
            ComparisonResult::Cit(_) => TaxType::Cit,
        }
    }

    /// Returns the recommendation regardless of tax type.
    pub fn recommendation(&self) -> Recommendation {
        match self {
            ComparisonResult::Pit(c) => c.comparison.recommendation,
            ComparisonResult::Cit(c) => c.comparison.recommendation,
        }
    }

    /// Returns the NEW-minus-OLD tax difference regardless of tax type.
    pub fn tax_difference(&self) -> Decimal {
        match self {
            ComparisonResult::Pit(c) => c.comparison.tax_difference,
            ComparisonResult::Cit(c) => c.comparison.tax_difference,
        }
    }
}

/// Body of a successful `/calculate` response.
///
/// The comparison's `old`, `new` and `comparison` objects are flattened into
/// the top level next to the envelope metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The tax type that was compared.
    pub tax_type: TaxType,
    /// Results and deltas.
    #[serde(flatten)]
    pub result: ComparisonResult,
}

impl CalculationResponse {
    /// Wraps a comparison with a fresh ID and timestamp.
    pub fn new(result: ComparisonResult) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            tax_type: result.tax_type(),
            result,
        }
    }
}
