//! Application state for the tax engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, TaxRules};

/// Shared application state.
///
/// Holds the regime rules, read-only and shared across all requests.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<TaxRules>,
}

impl AppState {
    /// Creates a new application state from loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self::from_rules(config.rules().clone())
    }

    /// Creates a new application state from rules directly.
    pub fn from_rules(rules: TaxRules) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Returns the regime rules.
    pub fn rules(&self) -> &TaxRules {
        &self.rules
    }
}
