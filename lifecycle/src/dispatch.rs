//! Procedure dispatch

use crate::{CallError, LifecycleManager, Procedure, ServiceDescriptor};
use core_types::ProcedureOrdinal;
use serde_json::Value;
use services_logger::{log_error, log_trace};

impl LifecycleManager {
    /// Looks up a service procedure.
    ///
    /// Returns `None` without consulting the service if it is not loaded.
    /// Otherwise the service's own mapping decides, and an unknown ordinal
    /// yields `None`. Dispatch only requires the service to be loaded, not
    /// started.
    pub fn get_proc(
        &self,
        descriptor: &ServiceDescriptor,
        ordinal: ProcedureOrdinal,
    ) -> Option<Procedure> {
        log_trace!(
            self.logger(),
            "Get procedure {}#{}",
            descriptor.name(),
            ordinal.get()
        );

        if !descriptor.is_loaded() {
            log_error!(self.logger(), "{} is not loaded", descriptor.name());
            return None;
        }

        descriptor
            .interface()
            .get_proc(&self.context(descriptor), ordinal)
    }

    /// Looks up and invokes a procedure in one step.
    ///
    /// Meant for infrequent calls. A caller invoking the same ordinal many
    /// times should keep the result of [`get_proc`](Self::get_proc) and call
    /// it with [`context`](Self::context) instead.
    pub fn call(
        &self,
        descriptor: &ServiceDescriptor,
        ordinal: ProcedureOrdinal,
        input: &Value,
        output: &mut Value,
    ) -> Result<(), CallError> {
        let Some(procedure) = self.get_proc(descriptor, ordinal) else {
            return Err(CallError::NoSuchProcedure {
                service: descriptor.name().to_string(),
                ordinal,
            });
        };

        procedure(&self.context(descriptor), input, output)?;
        Ok(())
    }
}
