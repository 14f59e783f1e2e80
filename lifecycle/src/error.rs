//! Lifecycle error types

use core_types::ProcedureOrdinal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    Load,
    Unload,
    Start,
    Stop,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Load => write!(f, "load"),
            Transition::Unload => write!(f, "unload"),
            Transition::Start => write!(f, "start"),
            Transition::Stop => write!(f, "stop"),
        }
    }
}

/// Failure reported by a service hook
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    /// The service refused the transition
    #[error("rejected: {0}")]
    Rejected(String),

    /// Something the service depends on is missing
    #[error("unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by the lifecycle manager
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("{service} is not loaded")]
    NotLoaded { service: String },

    #[error("{service} is already loaded")]
    AlreadyLoaded { service: String },

    #[error("{service} is already started")]
    AlreadyStarted { service: String },

    #[error("{service} is not started")]
    NotStarted { service: String },

    #[error("{service} state alloc failed")]
    AllocationFailure { service: String },

    /// Only `load` and `start` abort on hook failure
    #[error("{service} aborted during {transition}: {source}")]
    HookAbort {
        service: String,
        transition: Transition,
        source: HookError,
    },
}

impl LifecycleError {
    /// Name of the service the error concerns
    pub fn service(&self) -> &str {
        match self {
            LifecycleError::NotLoaded { service }
            | LifecycleError::AlreadyLoaded { service }
            | LifecycleError::AlreadyStarted { service }
            | LifecycleError::NotStarted { service }
            | LifecycleError::AllocationFailure { service }
            | LifecycleError::HookAbort { service, .. } => service,
        }
    }
}

/// Failure reported by a service procedure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcedureError {
    /// Nonzero status code from the procedure
    #[error("procedure failed with status {0}")]
    Status(i32),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors returned by [`LifecycleManager::call`](crate::LifecycleManager::call)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// Lookup produced nothing (unknown ordinal, or the service is not loaded)
    #[error("{service} has no procedure {ordinal}")]
    NoSuchProcedure {
        service: String,
        ordinal: ProcedureOrdinal,
    },

    /// The procedure ran and failed; its error is relayed unchanged
    #[error(transparent)]
    Procedure(#[from] ProcedureError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_lifecycle_error_display() {
        let err = LifecycleError::AlreadyLoaded {
            service: "face".to_string(),
        };
        assert_eq!(err.to_string(), "face is already loaded");
        assert_eq!(err.service(), "face");

        let err = LifecycleError::AllocationFailure {
            service: "speech".to_string(),
        };
        assert_eq!(err.to_string(), "speech state alloc failed");
    }

    #[test]
    fn test_hook_abort_keeps_source() {
        let err = LifecycleError::HookAbort {
            service: "monitor".to_string(),
            transition: Transition::Start,
            source: HookError::Unavailable("display".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "monitor aborted during start: unavailable: display"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_call_error_relays_procedure_error() {
        let err: CallError = ProcedureError::Status(7).into();
        assert_eq!(err, CallError::Procedure(ProcedureError::Status(7)));
        assert_eq!(err.to_string(), "procedure failed with status 7");

        let err = CallError::NoSuchProcedure {
            service: "console".to_string(),
            ordinal: ProcedureOrdinal::new(9),
        };
        assert_eq!(err.to_string(), "console has no procedure #9");
    }

    #[test]
    fn test_transition_display() {
        assert_eq!(Transition::Load.to_string(), "load");
        assert_eq!(Transition::Unload.to_string(), "unload");
        assert_eq!(Transition::Start.to_string(), "start");
        assert_eq!(Transition::Stop.to_string(), "stop");
    }
}
