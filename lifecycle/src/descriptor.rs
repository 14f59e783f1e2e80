//! Service descriptor and runtime state

use crate::budget::Slot;
use crate::ServiceInterface;
use core_types::ServiceId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Lifecycle states for a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    /// No state record exists
    Unloaded,
    /// Loaded but not running
    LoadedStopped,
    /// Loaded and running
    LoadedStarted,
}

impl LifecycleState {
    /// Checks if a state record exists
    pub fn is_loaded(&self) -> bool {
        !matches!(self, LifecycleState::Unloaded)
    }

    /// Checks if the service is running
    pub fn is_started(&self) -> bool {
        matches!(self, LifecycleState::LoadedStarted)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Unloaded => write!(f, "unloaded"),
            LifecycleState::LoadedStopped => write!(f, "loaded (stopped)"),
            LifecycleState::LoadedStarted => write!(f, "loaded (started)"),
        }
    }
}

/// Runtime record of a loaded service
///
/// Only the lifecycle manager creates and mutates these. A record holds its
/// manager's budget slot until it is dropped.
#[derive(Debug)]
pub struct ServiceState {
    instance: u64,
    pub(crate) started: bool,
    _slot: Slot,
}

impl ServiceState {
    pub(crate) fn new(instance: u64, slot: Slot) -> Self {
        Self {
            instance,
            started: false,
            _slot: slot,
        }
    }

    /// Sequence number assigned when the record was created
    ///
    /// Distinct for every load performed by the same manager.
    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Whether the service is started
    pub fn is_started(&self) -> bool {
        self.started
    }
}

/// Descriptor for a service
///
/// A descriptor is created once and outlives any number of load/unload
/// cycles. It holds a state record exactly while the service is loaded.
pub struct ServiceDescriptor {
    id: ServiceId,
    name: String,
    description: String,
    interface: Rc<dyn ServiceInterface>,
    pub(crate) state: Option<ServiceState>,
}

impl ServiceDescriptor {
    /// Creates an unloaded descriptor with a fresh random id
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        interface: Rc<dyn ServiceInterface>,
    ) -> Self {
        Self {
            id: ServiceId::new(),
            name: name.into(),
            description: description.into(),
            interface,
            state: None,
        }
    }

    /// Replaces the id with a stable one
    pub fn with_id(mut self, id: ServiceId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> ServiceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The shared interface implementation
    pub fn interface(&self) -> &Rc<dyn ServiceInterface> {
        &self.interface
    }

    /// The runtime record, present only while loaded
    pub fn state(&self) -> Option<&ServiceState> {
        self.state.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_started(&self) -> bool {
        self.state.as_ref().is_some_and(|state| state.started)
    }

    /// Current lifecycle state, derived from the runtime record
    pub fn lifecycle_state(&self) -> LifecycleState {
        match &self.state {
            None => LifecycleState::Unloaded,
            Some(state) if state.started => LifecycleState::LoadedStarted,
            Some(_) => LifecycleState::LoadedStopped,
        }
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::StateLedger;
    use crate::{HookResult, Procedure, ServiceContext};
    use core_types::ProcedureOrdinal;

    struct Inert;

    impl ServiceInterface for Inert {
        fn on_load(&self, _ctx: &ServiceContext<'_>) -> HookResult {
            Ok(())
        }
        fn on_unload(&self, _ctx: &ServiceContext<'_>) -> HookResult {
            Ok(())
        }
        fn on_start(&self, _ctx: &ServiceContext<'_>) -> HookResult {
            Ok(())
        }
        fn on_stop(&self, _ctx: &ServiceContext<'_>) -> HookResult {
            Ok(())
        }
        fn get_proc(&self, _ctx: &ServiceContext<'_>, _ordinal: ProcedureOrdinal) -> Option<Procedure> {
            None
        }
    }

    #[test]
    fn test_new_descriptor_is_unloaded() {
        let desc = ServiceDescriptor::new("inert", "Does nothing.", Rc::new(Inert));
        assert_eq!(desc.name(), "inert");
        assert_eq!(desc.description(), "Does nothing.");
        assert!(desc.state().is_none());
        assert!(!desc.is_loaded());
        assert!(!desc.is_started());
        assert_eq!(desc.lifecycle_state(), LifecycleState::Unloaded);
    }

    #[test]
    fn test_with_id() {
        let id = ServiceId::from_u128(5);
        let desc = ServiceDescriptor::new("inert", "", Rc::new(Inert)).with_id(id);
        assert_eq!(desc.id(), id);
    }

    #[test]
    fn test_lifecycle_state_follows_record() {
        let mut desc = ServiceDescriptor::new("inert", "", Rc::new(Inert));

        let ledger = StateLedger::default();
        desc.state = ledger.allocate();
        assert_eq!(desc.lifecycle_state(), LifecycleState::LoadedStopped);

        if let Some(state) = desc.state.as_mut() {
            state.started = true;
        }
        assert_eq!(desc.lifecycle_state(), LifecycleState::LoadedStarted);
        assert!(desc.is_started());
    }

    #[test]
    fn test_lifecycle_state_predicates() {
        assert!(!LifecycleState::Unloaded.is_loaded());
        assert!(LifecycleState::LoadedStopped.is_loaded());
        assert!(LifecycleState::LoadedStarted.is_loaded());
        assert!(LifecycleState::LoadedStarted.is_started());
        assert!(!LifecycleState::LoadedStopped.is_started());
    }

    #[test]
    fn test_interfaces_can_be_shared() {
        let iface: Rc<dyn ServiceInterface> = Rc::new(Inert);
        let a = ServiceDescriptor::new("a", "", Rc::clone(&iface));
        let b = ServiceDescriptor::new("b", "", Rc::clone(&iface));
        assert!(Rc::ptr_eq(a.interface(), b.interface()));
    }
}
