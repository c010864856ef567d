//! Capability initialization chain
//!
//! A host is built from parts that several capabilities fill in. Each
//! capability receives a [`Next`] continuation and is expected to run it
//! before doing its own setup, so capabilities declared earlier have
//! finished by the time later ones look at the parts.
//!
//! ```text
//! InitChain::new().with(PinAddressing).with(Components)
//!
//! run ─► Components::initialize
//!          └─ next.run ─► PinAddressing::initialize
//!                           └─ next.run ─► Ok(())   (chain exhausted)
//!                           pin stored
//!          registry stored
//! ```

use std::fmt;
use tracing::debug;

use crate::config::HostConfig;
use crate::error::InitError;

/// One layer of a host's construction
pub trait Capability<P>: Send + Sync {
    /// Short name used in logs and errors
    fn name(&self) -> &'static str;

    /// Set up this capability's state in `parts`.
    ///
    /// Implementations call `next.run(parts, config)` first and only then
    /// touch `parts`.
    fn initialize(
        &self,
        parts: &mut P,
        config: &HostConfig,
        next: Next<'_, P>,
    ) -> Result<(), InitError>;
}

/// The remainder of an initialization chain
pub struct Next<'a, P> {
    rest: &'a [Box<dyn Capability<P>>],
}

impl<'a, P> Next<'a, P> {
    /// Run the following capability, or succeed if there is none
    pub fn run(self, parts: &mut P, config: &HostConfig) -> Result<(), InitError> {
        match self.rest.split_last() {
            Some((capability, rest)) => {
                debug!(capability = capability.name(), "Initializing capability");
                capability.initialize(parts, config, Next { rest })
            }
            None => Ok(()),
        }
    }

    /// Whether any capability remains after this point
    pub fn is_exhausted(&self) -> bool {
        self.rest.is_empty()
    }
}

/// Capabilities of a host, in declared order
pub struct InitChain<P> {
    capabilities: Vec<Box<dyn Capability<P>>>,
}

impl<P> InitChain<P> {
    pub fn new() -> Self {
        Self {
            capabilities: Vec::new(),
        }
    }

    /// Declare another capability; it initializes after all earlier ones
    pub fn with<C: Capability<P> + 'static>(mut self, capability: C) -> Self {
        self.capabilities.push(Box::new(capability));
        self
    }

    pub fn push(&mut self, capability: Box<dyn Capability<P>>) {
        self.capabilities.push(capability);
    }

    /// Capability names in declared order
    pub fn names(&self) -> Vec<&'static str> {
        self.capabilities.iter().map(|c| c.name()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.capabilities.iter().any(|c| c.name() == name)
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Run the whole chain against `parts`
    pub fn run(&self, parts: &mut P, config: &HostConfig) -> Result<(), InitError> {
        Next {
            rest: &self.capabilities,
        }
        .run(parts, config)
    }
}

impl<P> Default for InitChain<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for InitChain<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitChain")
            .field("capabilities", &self.names())
            .finish()
    }
}
