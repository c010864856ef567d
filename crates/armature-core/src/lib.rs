//! Armature Core - Component registry and capability initialization chain
//!
//! This crate provides the pieces a hardware host object is built from:
//! - Opaque component handles compared by identity
//! - An insertion-ordered registry of attached components
//! - A capability chain that initializes layered host state in declared order
//! - A pin-addressed `Bus` host composed from those capabilities

pub mod bus;
pub mod capability;
pub mod component;
pub mod config;
pub mod error;
pub mod pins;
pub mod registry;

pub use bus::{Bus, BusParts};
pub use capability::{Capability, InitChain, Next};
pub use component::{Component, ComponentHandle, HostId};
pub use config::HostConfig;
pub use error::{ConfigError, InitError};
pub use pins::{PinAddressing, PinSlot};
pub use registry::{ComponentRegistry, Components, HasComponents, RegistrySlot};
