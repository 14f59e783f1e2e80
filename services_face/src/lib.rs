//! # Face Service
//!
//! Face recognition. No camera frames are processed yet; the hooks log their
//! transition and [`FaceProc::Hello`] is the only procedure.

use core_types::{face_service_id, ProcedureOrdinal};
use lifecycle::{
    HookResult, Procedure, ProcedureResult, ServiceContext, ServiceDescriptor, ServiceInterface,
};
use serde_json::Value;
use services_logger::log_info;
use std::rc::Rc;

/// Unique service name
pub const NAME: &str = "face";

/// Human-readable description
pub const DESCRIPTION: &str = "The face service does face recognition.";

/// Face service procedures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum FaceProc {
    /// Logs a greeting and returns it
    Hello = 0,
}

impl From<FaceProc> for ProcedureOrdinal {
    fn from(proc: FaceProc) -> Self {
        ProcedureOrdinal::new(proc as i32)
    }
}

/// Ordinal of the greeting procedure
pub const HELLO: ProcedureOrdinal = ProcedureOrdinal::new(FaceProc::Hello as i32);

impl TryFrom<ProcedureOrdinal> for FaceProc {
    type Error = ProcedureOrdinal;

    fn try_from(ordinal: ProcedureOrdinal) -> Result<Self, Self::Error> {
        match ordinal.get() {
            0 => Ok(FaceProc::Hello),
            _ => Err(ordinal),
        }
    }
}

fn proc_hello(ctx: &ServiceContext<'_>, _input: &Value, output: &mut Value) -> ProcedureResult {
    log_info!(ctx.logger(), "Hello, world!");
    *output = Value::from("Hello, world!");
    Ok(())
}

/// Face service hooks
#[derive(Debug, Default, Clone, Copy)]
pub struct FaceService;

impl ServiceInterface for FaceService {
    fn on_load(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Face service load");
        Ok(())
    }

    fn on_unload(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Face service unload");
        Ok(())
    }

    fn on_start(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Face service start");
        Ok(())
    }

    fn on_stop(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Face service stop");
        Ok(())
    }

    fn get_proc(&self, _ctx: &ServiceContext<'_>, ordinal: ProcedureOrdinal) -> Option<Procedure> {
        match FaceProc::try_from(ordinal).ok()? {
            FaceProc::Hello => Some(proc_hello as Procedure),
        }
    }
}

/// Creates the face service descriptor
pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new(NAME, DESCRIPTION, Rc::new(FaceService)).with_id(face_service_id())
}
