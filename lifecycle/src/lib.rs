//! # Lifecycle
//!
//! Service lifecycle management for Cozmonaut.
//!
//! ## Philosophy
//!
//! - **One contract for every subsystem**: console, face, monitor, scripting
//!   and speech are all driven through the same four transitions
//! - **Acquire is abortable, release is not**: `load` and `start` undo their
//!   side effects when a service refuses; `stop` and `unload` always finish
//! - **No ambient state**: descriptors are explicit values owned by the caller
//! - **No async runtime required**: every hook runs to completion in place
//!
//! ## Core Concepts
//!
//! - [`ServiceInterface`]: Hooks and procedure dispatch a service supplies
//! - [`ServiceDescriptor`]: Identity, interface and (while loaded) runtime state
//! - [`ServiceState`]: Runtime record that exists only while loaded
//! - [`LifecycleManager`]: Enforces the transitions and calls the hooks
//! - [`Procedure`]: A callable returned by dispatch for an ordinal
//!
//! ## Example
//!
//! ```
//! use lifecycle::{
//!     HookResult, LifecycleManager, LifecycleState, Procedure, ServiceContext,
//!     ServiceDescriptor, ServiceInterface,
//! };
//! use core_types::ProcedureOrdinal;
//! use services_logger::Logger;
//! use std::rc::Rc;
//!
//! struct Idle;
//!
//! impl ServiceInterface for Idle {
//!     fn on_load(&self, _ctx: &ServiceContext<'_>) -> HookResult { Ok(()) }
//!     fn on_unload(&self, _ctx: &ServiceContext<'_>) -> HookResult { Ok(()) }
//!     fn on_start(&self, _ctx: &ServiceContext<'_>) -> HookResult { Ok(()) }
//!     fn on_stop(&self, _ctx: &ServiceContext<'_>) -> HookResult { Ok(()) }
//!     fn get_proc(&self, _ctx: &ServiceContext<'_>, _ordinal: ProcedureOrdinal) -> Option<Procedure> {
//!         None
//!     }
//! }
//!
//! let manager = LifecycleManager::new(Logger::null());
//! let mut idle = ServiceDescriptor::new("idle", "Does nothing.", Rc::new(Idle));
//!
//! manager.load(&mut idle).unwrap();
//! manager.start(&mut idle).unwrap();
//! assert_eq!(idle.lifecycle_state(), LifecycleState::LoadedStarted);
//!
//! manager.unload(&mut idle).unwrap();
//! assert_eq!(idle.lifecycle_state(), LifecycleState::Unloaded);
//! ```

pub mod budget;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod interface;
pub mod manager;

pub use budget::StateBudget;
pub use descriptor::{LifecycleState, ServiceDescriptor, ServiceState};
pub use error::{CallError, HookError, LifecycleError, ProcedureError, Transition};
pub use interface::{
    HookResult, Procedure, ProcedureResult, ServiceContext, ServiceInterface,
};
pub use manager::LifecycleManager;
