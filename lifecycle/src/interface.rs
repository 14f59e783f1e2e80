//! The contract a service implements

use crate::{HookError, ProcedureError, ServiceDescriptor};
use core_types::{ProcedureOrdinal, ServiceId};
use serde_json::Value;
use services_logger::Logger;

/// Outcome of a lifecycle hook
pub type HookResult = Result<(), HookError>;

/// Outcome of a service procedure
pub type ProcedureResult = Result<(), ProcedureError>;

/// A service procedure
///
/// Receives the calling context, one read-only argument and one mutable
/// argument.
pub type Procedure = fn(&ServiceContext<'_>, &Value, &mut Value) -> ProcedureResult;

/// What a hook or procedure can see of its own service
pub struct ServiceContext<'a> {
    descriptor: &'a ServiceDescriptor,
    logger: Logger,
}

impl<'a> ServiceContext<'a> {
    pub(crate) fn new(descriptor: &'a ServiceDescriptor, logger: Logger) -> Self {
        Self { descriptor, logger }
    }

    /// Unique service name
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        self.descriptor.description()
    }

    /// Stable service identifier
    pub fn id(&self) -> ServiceId {
        self.descriptor.id()
    }

    /// Whether the service is currently started
    pub fn is_started(&self) -> bool {
        self.descriptor.is_started()
    }

    /// Logger tagged with the service name
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

/// Hooks and dispatch supplied by one kind of service
///
/// The lifecycle manager calls the hooks; implementations never call them
/// on themselves. A failing `on_load` or `on_start` aborts the transition.
/// A failing `on_stop` or `on_unload` is only reported.
pub trait ServiceInterface {
    /// Called after the state record is created
    fn on_load(&self, ctx: &ServiceContext<'_>) -> HookResult;

    /// Called before the state record is destroyed
    fn on_unload(&self, ctx: &ServiceContext<'_>) -> HookResult;

    /// Called after the service is marked started
    fn on_start(&self, ctx: &ServiceContext<'_>) -> HookResult;

    /// Called after the service is marked stopped
    fn on_stop(&self, ctx: &ServiceContext<'_>) -> HookResult;

    /// Maps an ordinal to a procedure, or `None` if the ordinal is unknown
    fn get_proc(&self, ctx: &ServiceContext<'_>, ordinal: ProcedureOrdinal) -> Option<Procedure>;
}
