//! Personal Income Tax input and result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::input::{read_amount, Fields, Sign};
use super::Regime;

/// Annual figures for one individual.
///
/// Every amount is non-negative; fields absent from a request default to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitInput {
    /// Basic salary.
    #[serde(default)]
    pub basic_salary: Decimal,
    /// Housing allowance before any regime cap.
    #[serde(default)]
    pub housing_allowance: Decimal,
    /// Transport allowance.
    #[serde(default)]
    pub transport_allowance: Decimal,
    /// All other allowances.
    #[serde(default)]
    pub other_allowances: Decimal,
    /// Pension contributions.
    #[serde(default)]
    pub pension: Decimal,
    /// National Housing Fund contributions.
    #[serde(default)]
    pub nhf: Decimal,
    /// Life insurance premiums.
    #[serde(default)]
    pub life_insurance: Decimal,
    /// Capital gains, taxed outside the brackets.
    #[serde(default)]
    pub capital_gains: Decimal,
    /// Digital-asset gains, taxed alongside capital gains.
    #[serde(default)]
    pub digital_assets: Decimal,
}

impl PitInput {
    /// Reads every PIT field from a flat request mapping.
    pub fn from_fields(fields: &Fields) -> EngineResult<Self> {
        let read = |name: &str| read_amount(fields, name, Sign::NonNegative);

        Ok(Self {
            basic_salary: read("basic_salary")?,
            housing_allowance: read("housing_allowance")?,
            transport_allowance: read("transport_allowance")?,
            other_allowances: read("other_allowances")?,
            pension: read("pension")?,
            nhf: read("nhf")?,
            life_insurance: read("life_insurance")?,
            capital_gains: read("capital_gains")?,
            digital_assets: read("digital_assets")?,
        })
    }

    /// Sum of the relief-eligible deductions (pension, NHF and life
    /// insurance). No cap is applied.
    pub fn deductions(&self) -> Decimal {
        self.pension + self.nhf + self.life_insurance
    }

    /// Gains taxed at the flat capital-gains rate.
    pub fn total_gains(&self) -> Decimal {
        self.capital_gains + self.digital_assets
    }
}

/// Outcome of a PIT calculation under one regime.
///
/// Field names match the JSON consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitResult {
    /// The regime these figures were computed under.
    pub law: Regime,
    /// Basic salary plus capped housing, transport and other allowances.
    pub gross_income: Decimal,
    /// Consolidated Relief Allowance.
    pub cra: Decimal,
    /// Income subject to the bracket table, never negative.
    pub taxable_income: Decimal,
    /// Annual PAYE from the bracket table.
    pub annual_paye: Decimal,
    /// Annual PAYE divided by twelve.
    pub monthly_paye: Decimal,
    /// Flat-rate tax on capital and digital-asset gains.
    pub capital_gains_tax: Decimal,
    /// PAYE plus capital-gains tax.
    pub total_tax: Decimal,
    /// Gross income plus gains, less total tax.
    pub net_income: Decimal,
    /// Net income divided by twelve.
    pub monthly_take_home: Decimal,
    /// Housing allowance after the regime cap.
    pub housing_allowance_capped: Decimal,
    /// Housing allowance as submitted.
    pub housing_raw: Decimal,
    /// Income taxed at 0% by the first bracket (zero when there is none).
    pub first_tax_free: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_from_fields_reads_all_fields() {
        let fields = json!({
            "basic_salary": 1000000,
            "housing_allowance": "600000",
            "transport_allowance": 120000,
            "other_allowances": 80000,
            "pension": 96000,
            "nhf": 25000,
            "life_insurance": 10000,
            "capital_gains": 50000,
            "digital_assets": 25000
        });

        let input = PitInput::from_fields(fields.as_object().unwrap()).unwrap();

        assert_eq!(input.basic_salary, dec("1000000"));
        assert_eq!(input.housing_allowance, dec("600000"));
        assert_eq!(input.deductions(), dec("131000"));
        assert_eq!(input.total_gains(), dec("75000"));
    }

    #[test]
    fn test_from_fields_defaults_missing_to_zero() {
        let fields = json!({"basic_salary": 500000});
        let input = PitInput::from_fields(fields.as_object().unwrap()).unwrap();

        assert_eq!(
            input,
            PitInput {
                basic_salary: dec("500000"),
                ..PitInput::default()
            }
        );
    }

    #[test]
    fn test_from_fields_rejects_negative_deduction() {
        let fields = json!({"pension": -1});
        assert!(PitInput::from_fields(fields.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_pit_result_serializes_wire_names() {
        let result = PitResult {
            law: Regime::New,
            gross_income: dec("1500000"),
            cra: dec("500000"),
            taxable_income: dec("1000000"),
            annual_paye: dec("30000"),
            monthly_paye: dec("2500"),
            capital_gains_tax: Decimal::ZERO,
            total_tax: dec("30000"),
            net_income: dec("1470000"),
            monthly_take_home: dec("122500"),
            housing_allowance_capped: dec("500000"),
            housing_raw: dec("600000"),
            first_tax_free: dec("800000"),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["law"], "NEW");
        assert_eq!(json["annual_paye"], "30000");
        assert_eq!(json["housing_allowance_capped"], "500000");
        assert_eq!(json["first_tax_free"], "800000");
    }
}
