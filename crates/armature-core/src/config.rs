//! Host configuration passed through the initialization chain
//!
//! A `HostConfig` is handed to every capability of a host while it is being
//! constructed. Capabilities read the keys they own and leave the rest alone;
//! the component registry itself never looks at it.
//!
//! Example:
//! ```toml
//! name = "onewire-0"
//! pin = 4
//! parasite_power = true
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::component::HostId;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Host name, used as its identifier in logs and errors
    #[serde(default)]
    pub name: Option<String>,
    /// Pin address for pin-addressed hosts
    #[serde(default)]
    pub pin: Option<u8>,
    /// Capability-specific keys, forwarded untouched
    #[serde(flatten)]
    pub options: BTreeMap<String, toml::Value>,
}

impl HostConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_pin(mut self, pin: u8) -> Self {
        self.pin = Some(pin);
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Look up a capability-specific key
    pub fn option(&self, key: &str) -> Option<&toml::Value> {
        self.options.get(key)
    }

    /// Identifier for the host being built from this config
    pub fn host_id(&self) -> HostId {
        self.name
            .as_deref()
            .map(HostId::from_name)
            .unwrap_or_else(HostId::temporary)
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), name = ?config.name, "Loaded host config");
        Ok(config)
    }
}
