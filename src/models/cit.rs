//! Company Income Tax input and result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::input::{read_amount, Fields, Sign};
use super::Regime;

/// Annual figures for one company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitInput {
    /// Annual turnover, used only to pick the company-size tier.
    #[serde(default)]
    pub turnover: Decimal,
    /// Assessable profit. May be negative; see [`CitResult::cit_payable`].
    #[serde(default)]
    pub profit: Decimal,
}

impl CitInput {
    /// Reads `turnover` and `profit` from a flat request mapping.
    ///
    /// Turnover must be non-negative. Profit keeps its sign.
    pub fn from_fields(fields: &Fields) -> EngineResult<Self> {
        Ok(Self {
            turnover: read_amount(fields, "turnover", Sign::NonNegative)?,
            profit: read_amount(fields, "profit", Sign::Any)?,
        })
    }
}

/// Outcome of a CIT calculation under one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitResult {
    /// The regime these figures were computed under.
    pub law: Regime,
    /// Tier name, e.g. "Medium Company".
    pub company_size: String,
    /// Turnover as submitted.
    pub turnover: Decimal,
    /// Profit as submitted.
    pub profit: Decimal,
    /// Tier rate as a percentage (18 for 18%).
    pub cit_rate: Decimal,
    /// Profit times the tier rate. Negative when profit is negative; callers
    /// treat that as zero liability.
    pub cit_payable: Decimal,
    /// Profit less CIT payable.
    pub net_profit: Decimal,
    /// Net profit divided by twelve.
    pub monthly_net_profit: Decimal,
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
    fn test_from_fields_keeps_negative_profit() {
        let fields = json!({"turnover": 10000000, "profit": "-250000"});
        let input = CitInput::from_fields(fields.as_object().unwrap()).unwrap();

        assert_eq!(input.turnover, dec("10000000"));
        assert_eq!(input.profit, dec("-250000"));
    }

    #[test]
    fn test_from_fields_rejects_negative_turnover() {
        let fields = json!({"turnover": -1, "profit": 0});
        assert!(CitInput::from_fields(fields.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_cit_result_deserialization() {
        let json = r#"{
            "law": "OLD",
            "company_size": "Medium Company",
            "turnover": "80000000",
            "profit": "10000000",
            "cit_rate": "20",
            "cit_payable": "2000000",
            "net_profit": "8000000",
            "monthly_net_profit": "666666.6666666666666666666667"
        }"#;

        let result: CitResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.law, Regime::Old);
        assert_eq!(result.company_size, "Medium Company");
        assert_eq!(result.cit_payable, dec("2000000"));
    }
}
