//! # Monitor Service
//!
//! Runs the graphical telemetry monitor.

use core_types::{monitor_service_id, ProcedureOrdinal};
use lifecycle::{
    HookResult, Procedure, ProcedureResult, ServiceContext, ServiceDescriptor, ServiceInterface,
};
use serde_json::Value;
use services_logger::log_info;
use std::rc::Rc;

/// Unique service name
pub const NAME: &str = "monitor";

/// Human-readable description
pub const DESCRIPTION: &str = "The monitor service runs the graphical monitor interface.";

/// Monitor service procedures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum MonitorProc {
    /// Logs a greeting and returns it
    Hello = 0,
}

impl From<MonitorProc> for ProcedureOrdinal {
    fn from(proc: MonitorProc) -> Self {
        ProcedureOrdinal::new(proc as i32)
    }
}

/// Ordinal of the greeting procedure
pub const HELLO: ProcedureOrdinal = ProcedureOrdinal::new(MonitorProc::Hello as i32);

impl TryFrom<ProcedureOrdinal> for MonitorProc {
    type Error = ProcedureOrdinal;

    fn try_from(ordinal: ProcedureOrdinal) -> Result<Self, Self::Error> {
        match ordinal.get() {
            0 => Ok(MonitorProc::Hello),
            _ => Err(ordinal),
        }
    }
}

fn proc_hello(ctx: &ServiceContext<'_>, _input: &Value, output: &mut Value) -> ProcedureResult {
    log_info!(ctx.logger(), "Hello, world!");
    *output = Value::from("Hello, world!");
    Ok(())
}

/// Monitor service hooks
#[derive(Debug, Default, Clone, Copy)]
pub struct MonitorService;

impl ServiceInterface for MonitorService {
    fn on_load(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Monitor service load");
        Ok(())
    }

    fn on_unload(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Monitor service unload");
        Ok(())
    }

    fn on_start(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Monitor service start");
        Ok(())
    }

    fn on_stop(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Monitor service stop");
        Ok(())
    }

    fn get_proc(&self, _ctx: &ServiceContext<'_>, ordinal: ProcedureOrdinal) -> Option<Procedure> {
        match MonitorProc::try_from(ordinal).ok()? {
            MonitorProc::Hello => Some(proc_hello as Procedure),
        }
    }
}

/// Creates the monitor service descriptor
pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new(NAME, DESCRIPTION, Rc::new(MonitorService)).with_id(monitor_service_id())
}
