//! Error types for host construction and configuration loading

use thiserror::Error;

use crate::component::HostId;

/// Errors raised while running a host's initialization chain
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Host {host} finished initialization without the {capability} capability")]
    MissingCapability {
        host: HostId,
        capability: &'static str,
    },
    #[error("Host {host} requires a pin address but none was configured")]
    MissingPin { host: HostId },
    #[error("Capability {capability} failed: {message}")]
    Capability {
        capability: &'static str,
        message: String,
    },
}

impl InitError {
    /// Convenience constructor for capability-specific failures
    pub fn capability(capability: &'static str, message: impl Into<String>) -> Self {
        Self::Capability {
            capability,
            message: message.into(),
        }
    }
}

/// Errors raised while loading a host configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read host config: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse host config: {0}")]
    ParseError(#[from] toml::de::Error),
}
