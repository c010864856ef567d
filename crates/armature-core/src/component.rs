//! Component handles and host identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Identifier for a host, taken from its configured name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostId(pub String);

impl HostId {
    /// Create a HostId from a configured name
    pub fn from_name(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Generate a temporary ID for hosts configured without a name
    pub fn temporary() -> Self {
        Self(format!("host-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that can be attached to a host: a sensor, an actuator, a nested bus.
///
/// Registries never look inside a component. `kind` exists only so log
/// output can say what was attached.
pub trait Component: fmt::Debug + Send + Sync + 'static {
    fn kind(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to an attached component.
///
/// Two handles are equal only when they point at the same component
/// instance, never because the components happen to hold equal data.
#[derive(Clone)]
pub struct ComponentHandle(Arc<dyn Component>);

impl ComponentHandle {
    pub fn new<C: Component>(component: C) -> Self {
        Self(Arc::new(component))
    }

    /// Wrap a component that is already shared elsewhere
    pub fn from_arc(component: Arc<dyn Component>) -> Self {
        Self(component)
    }

    pub fn kind(&self) -> &str {
        self.0.kind()
    }

    /// Borrow the underlying component
    pub fn get(&self) -> &dyn Component {
        self.0.as_ref()
    }
}

impl PartialEq for ComponentHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ComponentHandle {}

impl fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentHandle").field(&self.0).finish()
    }
}

impl<C: Component> From<Arc<C>> for ComponentHandle {
    fn from(component: Arc<C>) -> Self {
        Self(component)
    }
}
