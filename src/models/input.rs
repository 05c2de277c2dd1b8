//! Request field parsing.
//!
//! Requests carry a flat mapping of named monetary fields. This module turns
//! individual JSON values into [`Decimal`] amounts and assembles the typed
//! [`TaxInput`] handed to the comparator.
//!
//! Absent fields, `null` and blank strings read as zero. Numbers and numeric
//! strings are accepted. Any other JSON value fails with
//! [`EngineError::InvalidInput`] instead of silently becoming zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::error::{EngineError, EngineResult};

use super::{CitInput, PitInput, TaxType};

/// A flat mapping of request field names to raw JSON values.
pub type Fields = Map<String, Value>;

/// Largest magnitude accepted for any single amount (10^18).
///
/// Keeps every rule computation well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// Sign constraint applied to a parsed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Negative amounts are rejected.
    NonNegative,
    /// Any sign is accepted.
    Any,
}

/// Reads a single monetary field from a request.
///
/// # Examples
///
/// ```
/// use nigeria_tax_engine::models::{read_amount, Fields, Sign};
/// use rust_decimal::Decimal;
/// use serde_json::json;
///
/// let fields: Fields = json!({"pension": "12500.50"}).as_object().unwrap().clone();
/// let pension = read_amount(&fields, "pension", Sign::NonNegative).unwrap();
/// assert_eq!(pension, Decimal::new(1250050, 2));
///
/// let nhf = read_amount(&fields, "nhf", Sign::NonNegative).unwrap();
/// assert_eq!(nhf, Decimal::ZERO);
/// ```
pub fn read_amount(fields: &Fields, field: &str, sign: Sign) -> EngineResult<Decimal> {
    let amount = match fields.get(field) {
        None | Some(Value::Null) => return Ok(Decimal::ZERO),
        Some(Value::String(text)) if text.trim().is_empty() => return Ok(Decimal::ZERO),
        Some(Value::String(text)) => parse_decimal(text.trim()).ok_or_else(|| {
            EngineError::invalid_input(field, format!("'{}' is not a number", text))
        })?,
        Some(Value::Number(number)) => parse_decimal(&number.to_string()).ok_or_else(|| {
            EngineError::invalid_input(field, format!("{} is out of range", number))
        })?,
        Some(other) => {
            return Err(EngineError::invalid_input(
                field,
                format!("expected a number, got {}", json_kind(other)),
            ));
        }
    };

    if amount.abs() > MAX_AMOUNT {
        return Err(EngineError::invalid_input(
            field,
            format!("{} exceeds the maximum supported amount {}", amount, MAX_AMOUNT),
        ));
    }
    if sign == Sign::NonNegative && amount.is_sign_negative() && !amount.is_zero() {
        return Err(EngineError::invalid_input(
            field,
            format!("must not be negative, got {}", amount),
        ));
    }

    Ok(amount)
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Typed input for one comparison, doubling as the tax-type selector.
#[derive(Debug, Clone, PartialEq)]
pub enum TaxInput {
    /// Personal income tax figures.
    Pit(PitInput),
    /// Company income tax figures.
    Cit(CitInput),
}

impl TaxInput {
    /// Parses the fields relevant to `tax_type`, ignoring all others.
    pub fn from_fields(tax_type: TaxType, fields: &Fields) -> EngineResult<Self> {
        match tax_type {
            TaxType::Pit => PitInput::from_fields(fields).map(TaxInput::Pit),
            TaxType::Cit => CitInput::from_fields(fields).map(TaxInput::Cit),
        }
    }

    /// Returns the tax type this input belongs to.
    pub fn tax_type(&self) -> TaxType {
        match self {
            TaxInput::Pit(_) => TaxType::Pit,
            TaxInput::Cit(_) => TaxType::Cit,
        }
    }
}
