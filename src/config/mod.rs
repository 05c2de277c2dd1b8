//! Configuration loading and management for the tax engine.
//!
//! This module provides the regime rule bundles that parameterize the
//! calculators, a loader for YAML regime files, the built-in pre-2026 and
//! 2026 rules, and the server's environment settings.
//!
//! # Example
//!
//! ```no_run
//! use nigeria_tax_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/regimes").unwrap();
//! println!("Loaded: {}", config.rules().old_rules().description);
//! ```

pub mod builtin;
mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::{BIND_VAR, CONFIG_DIR_VAR, DEFAULT_BIND, ServerSettings};
pub use types::{
    Bracket, BracketTable, CitRules, CompanyTier, PitRules, RegimeRules, ReliefRule, TaxRules,
    TierTable,
};
