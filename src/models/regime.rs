//! Regime and tax-type selectors.
//!
//! This module defines the [`Regime`] enum distinguishing the pre-2026 and
//! 2026 rule sets, and the [`TaxType`] discriminator carried by requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the two parallel sets of tax rules compared side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Regime {
    /// Pre-2026 law.
    Old,
    /// 2026 law.
    New,
}

impl Regime {
    /// Both regimes in comparison order.
    pub const ALL: [Regime; 2] = [Regime::Old, Regime::New];

    /// Returns the label used on the wire ("OLD" or "NEW").
    ///
    /// # Examples
    ///
    /// ```
    /// use nigeria_tax_engine::models::Regime;
    ///
    /// assert_eq!(Regime::New.label(), "NEW");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Regime::Old => "OLD",
            Regime::New => "NEW",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which tax a comparison request is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxType {
    /// Personal Income Tax.
    Pit,
    /// Company Income Tax.
    Cit,
}

impl TaxType {
    /// Returns the discriminator used on the wire ("PIT" or "CIT").
    pub fn label(self) -> &'static str {
        match self {
            TaxType::Pit => "PIT",
            TaxType::Cit => "CIT",
        }
    }
}

impl fmt::Display for TaxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaxType {
    type Err = EngineError;

    /// Parses the discriminator case-insensitively, ignoring surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PIT" => Ok(TaxType::Pit),
            "CIT" => Ok(TaxType::Cit),
            _ => Err(EngineError::UnknownTaxType {
                value: s.to_string(),
            }),
        }
    }
}
