//! Error types for the tax engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a tax comparison request or rule load can hit.

use thiserror::Error;

/// The main error type for the tax engine.
///
/// Input errors (`InvalidInput`, `UnknownTaxType`) are terminal for the
/// request that caused them. The remaining variants come from loading
/// regime rules or server settings.
///
/// # Example
///
/// ```
/// use nigeria_tax_engine::error::EngineError;
///
/// let error = EngineError::UnknownTaxType {
///     value: "VAT".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown tax type 'VAT': expected PIT or CIT");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A request field was not a usable monetary amount.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The request field that was rejected.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// The tax-type discriminator was neither PIT nor CIT.
    #[error("Unknown tax type '{value}': expected PIT or CIT")]
    UnknownTaxType {
        /// The discriminator value that was received.
        value: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Regime rules were readable but violate a table invariant.
    #[error("Invalid regime configuration: {message}")]
    InvalidConfig {
        /// A description of the violated invariant.
        message: String,
    },

    /// A server setting could not be interpreted.
    #[error("Invalid setting {name}={value}")]
    InvalidSetting {
        /// The environment variable name.
        name: String,
        /// The rejected value.
        value: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an [`EngineError::InvalidConfig`].
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by the caller's request rather than
    /// by the engine's own configuration.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInput { .. } | EngineError::UnknownTaxType { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
