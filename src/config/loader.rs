//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading regime rules
//! from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Regime;

use super::types::{RegimeRules, TaxRules};

/// Loads and provides access to regime rules.
///
/// # Directory Structure
///
/// ```text
/// config/regimes/
/// ├── old.yaml   # Pre-2026 rules
/// └── new.yaml   # 2026 rules
/// ```
///
/// # Example
///
/// ```no_run
/// use nigeria_tax_engine::config::ConfigLoader;
/// use nigeria_tax_engine::models::Regime;
///
/// let loader = ConfigLoader::load("./config/regimes").unwrap();
/// let new_rules = loader.for_regime(Regime::New);
/// println!("Housing cap: {:?}", new_rules.pit.housing_allowance_cap);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: TaxRules,
}

impl ConfigLoader {
    /// Loads both regime files from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file is not valid YAML or breaks a table invariant
    ///   (`ConfigParseError`)
    /// - A file describes the wrong regime or has out-of-range rates
    ///   (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let old = Self::load_yaml::<RegimeRules>(&path.join(Self::file_name(Regime::Old)))?;
        let new = Self::load_yaml::<RegimeRules>(&path.join(Self::file_name(Regime::New)))?;

        Ok(Self {
            rules: TaxRules::new(old, new)?,
        })
    }

    /// Wraps the built-in rules.
    pub fn builtin() -> Self {
        Self {
            rules: TaxRules::builtin(),
        }
    }

    /// Returns the file name holding a regime's rules.
    pub fn file_name(regime: Regime) -> &'static str {
        match regime {
            Regime::Old => "old.yaml",
            Regime::New => "new.yaml",
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rules for both regimes.
    pub fn rules(&self) -> &TaxRules {
        &self.rules
    }

    /// Returns the rules for one regime.
    pub fn for_regime(&self, regime: Regime) -> &RegimeRules {
        self.rules.for_regime(regime)
    }
}
