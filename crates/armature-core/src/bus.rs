//! Pin-addressed bus that tracks the components attached to it
//!
//! A `Bus` is the usual host: one-wire, shift-register chains, anything with
//! a single pin and an open-ended set of devices hanging off it. It is built
//! by running pin addressing and then the component registry through an
//! [`InitChain`], so the registry exists as soon as a `Bus` value does.

use tracing::info;

use crate::capability::InitChain;
use crate::component::{Component, HostId};
use crate::config::HostConfig;
use crate::error::InitError;
use crate::pins::{PinAddressing, PinSlot};
use crate::registry::{ComponentRegistry, Components, HasComponents, RegistrySlot};

/// State collected while a bus is being initialized
#[derive(Debug, Default)]
pub struct BusParts {
    pin: Option<u8>,
    registry: Option<ComponentRegistry>,
}

impl PinSlot for BusParts {
    fn pin_slot(&mut self) -> &mut Option<u8> {
        &mut self.pin
    }
}

impl RegistrySlot for BusParts {
    fn registry_slot(&mut self) -> &mut Option<ComponentRegistry> {
        &mut self.registry
    }
}

#[derive(Debug)]
pub struct Bus {
    id: HostId,
    pin: u8,
    config: HostConfig,
    registry: ComponentRegistry,
}

impl Bus {
    /// Capabilities every bus is built from, in initialization order
    pub fn default_chain() -> InitChain<BusParts> {
        InitChain::new().with(PinAddressing).with(Components)
    }

    /// Build a bus with the default chain
    pub fn new(config: HostConfig) -> Result<Self, InitError> {
        Self::with_chain(config, &Self::default_chain())
    }

    /// Build a bus from a caller-supplied chain.
    ///
    /// The chain must establish both the pin and the registry; whichever is
    /// missing afterwards is reported as `MissingCapability`.
    pub fn with_chain(config: HostConfig, chain: &InitChain<BusParts>) -> Result<Self, InitError> {
        let id = config.host_id();
        let mut parts = BusParts::default();
        chain.run(&mut parts, &config)?;

        let pin = parts.pin.ok_or_else(|| InitError::MissingCapability {
            host: id.clone(),
            capability: PinAddressing::NAME,
        })?;
        let registry = parts.registry.ok_or_else(|| InitError::MissingCapability {
            host: id.clone(),
            capability: Components::NAME,
        })?;

        info!(host = %id, pin, capabilities = ?chain.names(), "Bus initialized");
        Ok(Self {
            id,
            pin,
            config,
            registry,
        })
    }

    pub fn id(&self) -> &HostId {
        &self.id
    }

    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// The configuration this bus was built from
    pub fn config(&self) -> &HostConfig {
        &self.config
    }
}

impl HasComponents for Bus {
    fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.registry
    }
}

impl Component for Bus {
    fn kind(&self) -> &str {
        "bus"
    }
}
