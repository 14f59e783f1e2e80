//! # Console Service
//!
//! Owns the console user interface (CUI) of the robot.
//!
//! The hooks only announce themselves for now. The single procedure,
//! [`ConsoleProc::Hello`], logs a greeting and writes it to the output
//! argument.

use core_types::{console_service_id, ProcedureOrdinal};
use lifecycle::{
    HookResult, Procedure, ProcedureResult, ServiceContext, ServiceDescriptor, ServiceInterface,
};
use serde_json::Value;
use services_logger::log_info;
use std::rc::Rc;

/// Unique service name
pub const NAME: &str = "console";

/// Human-readable description
pub const DESCRIPTION: &str = "The console service manages the console user interface (CUI).";

/// Console service procedures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ConsoleProc {
    /// Logs a greeting and returns it
    Hello = 0,
}

impl From<ConsoleProc> for ProcedureOrdinal {
    fn from(proc: ConsoleProc) -> Self {
        ProcedureOrdinal::new(proc as i32)
    }
}

/// Ordinal of the greeting procedure
pub const HELLO: ProcedureOrdinal = ProcedureOrdinal::new(ConsoleProc::Hello as i32);

impl TryFrom<ProcedureOrdinal> for ConsoleProc {
    type Error = ProcedureOrdinal;

    fn try_from(ordinal: ProcedureOrdinal) -> Result<Self, Self::Error> {
        match ordinal.get() {
            0 => Ok(ConsoleProc::Hello),
            _ => Err(ordinal),
        }
    }
}

fn proc_hello(ctx: &ServiceContext<'_>, _input: &Value, output: &mut Value) -> ProcedureResult {
    log_info!(ctx.logger(), "Hello, world!");
    *output = Value::from("Hello, world!");
    Ok(())
}

/// Console service hooks
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleService;

impl ServiceInterface for ConsoleService {
    fn on_load(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Console service load");
        Ok(())
    }

    fn on_unload(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Console service unload");
        Ok(())
    }

    fn on_start(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Console service start");
        Ok(())
    }

    fn on_stop(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Console service stop");
        Ok(())
    }

    fn get_proc(&self, _ctx: &ServiceContext<'_>, ordinal: ProcedureOrdinal) -> Option<Procedure> {
        match ConsoleProc::try_from(ordinal).ok()? {
            ConsoleProc::Hello => Some(proc_hello as Procedure),
        }
    }
}

/// Creates the console service descriptor
pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new(NAME, DESCRIPTION, Rc::new(ConsoleService)).with_id(console_service_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifecycle::LifecycleManager;
    use services_logger::{LogLevel, Logger, MemorySink};
    use std::sync::Arc;

    #[test]
    fn test_descriptor_identity() {
        let desc = descriptor();
        assert_eq!(desc.name(), "console");
        assert_eq!(desc.description(), DESCRIPTION);
        assert_eq!(desc.id(), console_service_id());
        assert!(!desc.is_loaded());
    }

    #[test]
    fn test_hooks_announce_themselves() {
        let sink = MemorySink::new();
        let manager = LifecycleManager::new(Logger::new(Arc::new(sink.clone())));
        let mut desc = descriptor();

        manager.load(&mut desc).unwrap();
        manager.start(&mut desc).unwrap();
        manager.stop(&mut desc).unwrap();
        manager.unload(&mut desc).unwrap();

        let own: Vec<String> = sink
            .records()
            .into_iter()
            .filter(|record| record.source.as_deref() == Some(NAME))
            .map(|record| record.message())
            .collect();
        assert_eq!(
            own,
            vec![
                "Console service load",
                "Console service start",
                "Console service stop",
                "Console service unload",
            ]
        );
    }

    #[test]
    fn test_hello_greets() {
        let sink = MemorySink::new();
        let manager = LifecycleManager::new(Logger::new(Arc::new(sink.clone())));
        let mut desc = descriptor();
        manager.load(&mut desc).unwrap();

        let mut output = Value::Null;
        manager
            .call(&desc, ConsoleProc::Hello.into(), &Value::Null, &mut output)
            .unwrap();

        assert_eq!(output, Value::from("Hello, world!"));
        assert!(sink.contains(LogLevel::Info, "Hello, world!"));
    }
}
