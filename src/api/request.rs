//! Request types for the tax engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint: a `tax_type` discriminator next to a flat set of numeric fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::models::{Fields, TaxInput, TaxType};

/// Request body for the `/calculate` endpoint.
///
/// ```json
/// { "tax_type": "PIT", "basic_salary": 1000000, "housing_allowance": "600000" }
/// ```
///
/// Every key other than `tax_type` is collected into `fields` and parsed
/// according to the tax type. Unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// "PIT" or "CIT".
    #[serde(default)]
    pub tax_type: Option<String>,
    /// The flat numeric fields.
    #[serde(flatten)]
    pub fields: Fields,
}

impl CalculationRequest {
    /// Builds a request carrying the figures of a typed input.
    ///
    /// Amounts are written as decimal strings so no precision is lost.
    pub fn from_input(input: &TaxInput) -> Self {
        let amounts = match input {
            TaxInput::Pit(pit) => vec![
                ("basic_salary", pit.basic_salary),
                ("housing_allowance", pit.housing_allowance),
                ("transport_allowance", pit.transport_allowance),
                ("other_allowances", pit.other_allowances),
                ("pension", pit.pension),
                ("nhf", pit.nhf),
                ("life_insurance", pit.life_insurance),
                ("capital_gains", pit.capital_gains),
                ("digital_assets", pit.digital_assets),
            ],
            TaxInput::Cit(cit) => vec![("turnover", cit.turnover), ("profit", cit.profit)],
        };

        Self {
            tax_type: Some(input.tax_type().label().to_string()),
            fields: amounts
                .into_iter()
                .map(|(name, amount)| (name.to_string(), Value::String(amount.to_string())))
                .collect(),
        }
    }

    /// Parses the discriminator.
    pub fn tax_type(&self) -> EngineResult<TaxType> {
        match &self.tax_type {
            Some(value) => value.parse(),
            None => Err(EngineError::invalid_input("tax_type", "is required")),
        }
    }

    /// Parses the discriminator and the fields it selects.
    pub fn to_input(&self) -> EngineResult<TaxInput> {
        TaxInput::from_fields(self.tax_type()?, &self.fields)
    }
}
