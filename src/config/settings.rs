//! Server settings.
//!
//! Settings are read from environment variables with fallback to defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Environment variable holding the listen address.
pub const BIND_VAR: &str = "TAX_ENGINE_BIND";

/// Environment variable holding the regime directory.
pub const CONFIG_DIR_VAR: &str = "TAX_ENGINE_CONFIG_DIR";

/// Default listen address.
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address the server listens on.
    pub bind: SocketAddr,
    /// Directory with `old.yaml` and `new.yaml`. `None` selects the built-in
    /// rules.
    pub config_dir: Option<PathBuf>,
}

impl ServerSettings {
    /// Loads settings from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads settings through an arbitrary variable lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use nigeria_tax_engine::config::ServerSettings;
    ///
    /// let settings = ServerSettings::from_lookup(|name| match name {
    ///     "TAX_ENGINE_BIND" => Some("127.0.0.1:8080".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(settings.bind.port(), 8080);
    /// assert!(settings.config_dir.is_none());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_value = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_value
            .trim()
            .parse()
            .map_err(|_| EngineError::InvalidSetting {
                name: BIND_VAR.to_string(),
                value: bind_value.clone(),
            })?;

        let config_dir = lookup(CONFIG_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { bind, config_dir })
    }
}
