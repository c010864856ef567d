//! Ordered registry of the components attached to a host

use tracing::{debug, trace};

use crate::capability::{Capability, Next};
use crate::component::ComponentHandle;
use crate::config::HostConfig;
use crate::error::InitError;

/// Insertion-ordered list of attached components.
///
/// Duplicates are allowed; attaching the same component twice lists it
/// twice. Removal takes out the earliest matching entry only. The registry
/// is deliberately not `Clone`: it belongs to exactly one host.
#[derive(Debug)]
pub struct ComponentRegistry<C = ComponentHandle> {
    components: Vec<C>,
}

impl<C: PartialEq> ComponentRegistry<C> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Append a component; it enumerates last
    pub fn add(&mut self, component: C) {
        self.components.push(component);
    }

    /// Remove the first entry equal to `component`.
    ///
    /// Returns whether anything was removed. Absent components are not an
    /// error.
    pub fn remove(&mut self, component: &C) -> bool {
        match self.components.iter().position(|c| c == component) {
            Some(index) => {
                self.components.remove(index);
                true
            }
            None => false,
        }
    }

    /// Attached components in attach order
    pub fn as_slice(&self) -> &[C] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.components.iter()
    }

    pub fn contains(&self, component: &C) -> bool {
        self.components.contains(component)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<C: PartialEq> Default for ComponentRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C: PartialEq> IntoIterator for &'a ComponentRegistry<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Capability of a host that tracks attached components.
///
/// Implementors only hand out their registry; the attach/detach/enumerate
/// surface comes from the provided methods.
pub trait HasComponents {
    fn registry(&self) -> &ComponentRegistry;

    fn registry_mut(&mut self) -> &mut ComponentRegistry;

    fn add_component(&mut self, component: ComponentHandle) {
        let registry = self.registry_mut();
        debug!(component = component.kind(), "Attaching component");
        registry.add(component);
        trace!(count = registry.len(), "Registry grew");
    }

    fn remove_component(&mut self, component: &ComponentHandle) {
        if self.registry_mut().remove(component) {
            debug!(component = component.kind(), "Detached component");
        } else {
            trace!(component = component.kind(), "Component not attached, nothing to detach");
        }
    }

    fn components(&self) -> &[ComponentHandle] {
        self.registry().as_slice()
    }

    fn component_count(&self) -> usize {
        self.registry().len()
    }

    fn has_component(&self, component: &ComponentHandle) -> bool {
        self.registry().contains(component)
    }
}

/// Parts of a host under construction that can hold a registry
pub trait RegistrySlot {
    fn registry_slot(&mut self) -> &mut Option<ComponentRegistry>;
}

/// Initialization step that gives a host its empty component registry
#[derive(Debug, Clone, Copy, Default)]
pub struct Components;

impl Components {
    pub const NAME: &'static str = "components";
}

impl<P: RegistrySlot> Capability<P> for Components {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn initialize(
        &self,
        parts: &mut P,
        config: &HostConfig,
        next: Next<'_, P>,
    ) -> Result<(), InitError> {
        next.run(parts, config)?;

        // Running this twice on the same parts replaces the registry.
        *parts.registry_slot() = Some(ComponentRegistry::new());
        debug!(host = ?config.name, "Component registry ready");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::InitChain;
    use crate::component::Component;

    #[derive(Debug)]
    struct Sensor(&'static str);

    impl Component for Sensor {}

    struct Host {
        registry: ComponentRegistry,
    }

    impl HasComponents for Host {
        fn registry(&self) -> &ComponentRegistry {
            &self.registry
        }

        fn registry_mut(&mut self) -> &mut ComponentRegistry {
            &mut self.registry
        }
    }

    fn host() -> Host {
        Host {
            registry: ComponentRegistry::new(),
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let host = host();
        assert!(host.components().is_empty());
        assert_eq!(host.component_count(), 0);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut host = host();
        let sensors: Vec<_> = ["a", "b", "c", "d"]
            .into_iter()
            .map(|name| ComponentHandle::new(Sensor(name)))
            .collect();

        for sensor in &sensors {
            host.add_component(sensor.clone());
        }

        assert_eq!(host.components(), sensors.as_slice());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut host = host();
        let attached = ComponentHandle::new(Sensor("attached"));
        let stranger = ComponentHandle::new(Sensor("stranger"));
        host.add_component(attached.clone());

        host.remove_component(&stranger);

        assert_eq!(host.components(), &[attached]);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut host = host();
        let a = ComponentHandle::new(Sensor("a"));
        let b = ComponentHandle::new(Sensor("b"));
        host.add_component(a.clone());
        host.add_component(a.clone());
        host.add_component(b.clone());

        host.remove_component(&a);

        assert_eq!(host.components(), &[a.clone(), b.clone()]);
        assert!(host.has_component(&a));
    }

    #[test]
    fn test_remove_keeps_relative_order_of_later_duplicates() {
        let mut registry: ComponentRegistry<u32> = ComponentRegistry::new();
        for value in [1, 2, 1, 3, 1] {
            registry.add(value);
        }

        assert!(registry.remove(&1));
        assert_eq!(registry.as_slice(), &[2, 1, 3, 1]);
        assert!(!registry.remove(&9));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_registry_iterates_in_order() {
        let mut registry = ComponentRegistry::default();
        registry.add("x");
        registry.add("y");

        let seen: Vec<_> = (&registry).into_iter().copied().collect();
        assert_eq!(seen, vec!["x", "y"]);
    }

    #[derive(Default)]
    struct Parts {
        registry: Option<ComponentRegistry>,
    }

    impl RegistrySlot for Parts {
        fn registry_slot(&mut self) -> &mut Option<ComponentRegistry> {
            &mut self.registry
        }
    }

    #[test]
    fn test_components_capability_installs_empty_registry() {
        let chain = InitChain::new().with(Components);
        let mut parts = Parts::default();

        chain.run(&mut parts, &HostConfig::default()).unwrap();

        let registry = parts.registry.expect("registry installed");
        assert!(registry.is_empty());
    }
}
