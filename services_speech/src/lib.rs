//! # Speech Service
//!
//! Speech recognition and synthesis. Audio is not touched yet.

use core_types::{speech_service_id, ProcedureOrdinal};
use lifecycle::{
    HookResult, Procedure, ProcedureResult, ServiceContext, ServiceDescriptor, ServiceInterface,
};
use serde_json::Value;
use services_logger::log_info;
use std::rc::Rc;

/// Unique service name
pub const NAME: &str = "speech";

/// Human-readable description
pub const DESCRIPTION: &str = "The speech service does speech recognition and synthesis.";

/// Speech service procedures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SpeechProc {
    /// Logs a greeting and returns it
    Hello = 0,
}

impl From<SpeechProc> for ProcedureOrdinal {
    fn from(proc: SpeechProc) -> Self {
        ProcedureOrdinal::new(proc as i32)
    }
}

/// Ordinal of the greeting procedure
pub const HELLO: ProcedureOrdinal = ProcedureOrdinal::new(SpeechProc::Hello as i32);

impl TryFrom<ProcedureOrdinal> for SpeechProc {
    type Error = ProcedureOrdinal;

    fn try_from(ordinal: ProcedureOrdinal) -> Result<Self, Self::Error> {
        match ordinal.get() {
            0 => Ok(SpeechProc::Hello),
            _ => Err(ordinal),
        }
    }
}

fn proc_hello(ctx: &ServiceContext<'_>, _input: &Value, output: &mut Value) -> ProcedureResult {
    log_info!(ctx.logger(), "Hello, world!");
    *output = Value::from("Hello, world!");
    Ok(())
}

/// Speech service hooks
#[derive(Debug, Default, Clone, Copy)]
pub struct SpeechService;

impl ServiceInterface for SpeechService {
    fn on_load(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Speech service load");
        Ok(())
    }

    fn on_unload(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Speech service unload");
        Ok(())
    }

    fn on_start(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Speech service start");
        Ok(())
    }

    fn on_stop(&self, ctx: &ServiceContext<'_>) -> HookResult {
        log_info!(ctx.logger(), "Speech service stop");
        Ok(())
    }

    fn get_proc(&self, _ctx: &ServiceContext<'_>, ordinal: ProcedureOrdinal) -> Option<Procedure> {
        match SpeechProc::try_from(ordinal).ok()? {
            SpeechProc::Hello => Some(proc_hello as Procedure),
        }
    }
}

/// Creates the speech service descriptor
pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new(NAME, DESCRIPTION, Rc::new(SpeechService)).with_id(speech_service_id())
}
