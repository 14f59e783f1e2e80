//! # Scripting Service
//!
//! Hosts the embedded Python interpreter that behaviour scripts run in.
//!
//! Nothing is interpreted yet: the hooks log their transition and
//! [`ScriptingProc::Hello`] greets.

use core_types::{scripting_service_id, ProcedureOrdinal};
use lifecycle::{
    HookResult, Procedure, ProcedureResult, ServiceContext, ServiceDescriptor, ServiceInterface,
};
use serde_json::Value;
use services_logger::log_info;
use std::rc::Rc;

/// Unique service name
pub const NAME: &str = "scripting";

/// Human-readable description
pub const DESCRIPTION: &str = "The scripting service hosts the embedded Python interpreter.";

/// Scripting service procedures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ScriptingProc {
    /// Logs a greeting and returns it
    Hello = 0,
}

impl From<ScriptingProc> for ProcedureOrdinal {
    fn from(proc: ScriptingProc) -> Self {
        ProcedureOrdinal::new(proc as i32)
    }
}

/// Ordinal of the greeting procedure
pub const HELLO: ProcedureOrdinal = ProcedureOrdinal::new(ScriptingProc::Hello as i32);

impl TryFrom<ProcedureOrdinal> for ScriptingProc {
    type Error = ProcedureOrdinal;

    fn try_from(ordinal: ProcedureOrdinal) -> Result<Self, Self::Error> {
        match ordinal.get() {
            0 => Ok(ScriptingProc::Hello),
            _ => Err(ordinal),
        }
    }
}

fn proc_hello(ctx: &ServiceContext<'_>, _input: &Value, output: &mut Value) -> ProcedureResult {
    log_info!(ctx.logger(), "Hello, world!");
    *output = Value::from("Hello, world!");
    Ok(())
}

/// Scripting service hooks
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptingService;

impl ServiceInterface for ScriptingService {
    fn on_load(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Scripting service load");
        Ok(())
    }

    fn on_unload(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Scripting service unload");
        Ok(())
    }

    fn on_start(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Scripting service start");
        Ok(())
    }

    fn on_stop(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Scripting service stop");
        Ok(())
    }

    fn get_proc(&self, _ctx: &ServiceContext<'_>, ordinal: ProcedureOrdinal) -> Option<Procedure> {
        match ScriptingProc::try_from(ordinal).ok()? {
            ScriptingProc::Hello => Some(proc_hello as Procedure),
        }
    }
}

/// Creates the scripting service descriptor
pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new(NAME, DESCRIPTION, Rc::new(ScriptingService)).with_id(scripting_service_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifecycle::LifecycleManager;
    use services_logger::Logger;

    #[test]
    fn test_hello_while_started() {
        let manager = LifecycleManager::new(Logger::null());
        let mut desc = descriptor();
        manager.load(&mut desc).unwrap();
        manager.start(&mut desc).unwrap();

        let hello = manager
            .get_proc(&desc, ScriptingProc::Hello.into())
            .unwrap();
        let mut output = Value::Null;
        hello(&manager.context(&desc), &Value::Null, &mut output).unwrap();

        assert_eq!(output, Value::from("Hello, world!"));
    }

    #[test]
    fn test_descriptor_identity() {
        let desc = descriptor();
        assert_eq!(desc.name(), "scripting");
        assert_eq!(desc.id(), scripting_service_id());
    }
}
