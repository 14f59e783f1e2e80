//! Lifecycle manager

use crate::budget::StateLedger;
use crate::{
    LifecycleError, ServiceContext, ServiceDescriptor, StateBudget, Transition,
};
use services_logger::{log_error, log_info, log_trace, log_warn, Logger};
use std::rc::Rc;

const LOG_TAG: &str = "service";

/// Drives descriptors through load, start, stop and unload.
///
/// The manager holds no descriptors. Callers own them and pass them in; the
/// manager only checks preconditions, calls hooks, and creates or destroys
/// the state record.
#[derive(Debug)]
pub struct LifecycleManager {
    /// Logger for the manager's own records
    logger: Logger,
    /// Logger that services derive their tagged loggers from
    service_logger: Logger,
    /// State record accounting
    ledger: StateLedger,
}

impl LifecycleManager {
    /// Creates a manager with an unlimited state budget
    pub fn new(logger: Logger) -> Self {
        Self {
            service_logger: logger.clone(),
            logger: logger.with_source(LOG_TAG),
            ledger: StateLedger::new(StateBudget::Unlimited),
        }
    }

    /// Limits how many services may be loaded at once
    pub fn with_budget(mut self, budget: StateBudget) -> Self {
        self.ledger = StateLedger::new(budget);
        self
    }

    pub fn budget(&self) -> StateBudget {
        self.ledger.budget()
    }

    pub(crate) fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Number of records issued by this manager that are still alive
    ///
    /// A record gives its slot back when it is destroyed, whether by this
    /// manager, by another manager, or by dropping its descriptor.
    pub fn loaded_count(&self) -> usize {
        self.ledger.live()
    }

    /// Builds the context handed to hooks and procedures of `descriptor`
    pub fn context<'a>(&self, descriptor: &'a ServiceDescriptor) -> ServiceContext<'a> {
        ServiceContext::new(
            descriptor,
            self.service_logger.with_source(descriptor.name()),
        )
    }

    /// Loads a service.
    ///
    /// Fails if the service is already loaded, if no state record can be
    /// allocated, or if `on_load` refuses. A refused load leaves nothing
    /// behind.
    pub fn load(&self, descriptor: &mut ServiceDescriptor) -> Result<(), LifecycleError> {
        log_trace!(self.logger, "Loading {}", descriptor.name());

        if descriptor.state.is_some() {
            log_error!(self.logger, "{} is already loaded", descriptor.name());
            return Err(LifecycleError::AlreadyLoaded {
                service: descriptor.name().to_string(),
            });
        }

        let Some(state) = self.ledger.allocate() else {
            log_error!(self.logger, "{} state alloc failed", descriptor.name());
            return Err(LifecycleError::AllocationFailure {
                service: descriptor.name().to_string(),
            });
        };
        descriptor.state = Some(state);

        let interface = Rc::clone(descriptor.interface());
        let outcome = interface.on_load(&self.context(descriptor));
        if let Err(err) = outcome {
            log_error!(
                self.logger,
                "{} aborted during load: {}",
                descriptor.name(),
                err.to_string()
            );
            descriptor.state = None;
            return Err(LifecycleError::HookAbort {
                service: descriptor.name().to_string(),
                transition: Transition::Load,
                source: err,
            });
        }

        log_info!(self.logger, "Loaded {}", descriptor.name());
        log_info!(self.logger, "{}", descriptor.description());

        Ok(())
    }

    /// Unloads a loaded service.
    ///
    /// A started service is stopped first. Once the service is known to be
    /// loaded, unload always completes: a failing `on_unload` is logged as a
    /// warning and the state record is destroyed anyway.
    pub fn unload(&self, descriptor: &mut ServiceDescriptor) -> Result<(), LifecycleError> {
        log_trace!(self.logger, "Unloading {}", descriptor.name());

        let Some(state) = descriptor.state.as_ref() else {
            log_error!(self.logger, "{} is not loaded", descriptor.name());
            return Err(LifecycleError::NotLoaded {
                service: descriptor.name().to_string(),
            });
        };

        if state.started {
            log_trace!(
                self.logger,
                "{} is still started, so stopping it before unload",
                descriptor.name()
            );
            if let Err(err) = self.stop(descriptor) {
                log_warn!(
                    self.logger,
                    "{} could not be stopped before unload: {}",
                    descriptor.name(),
                    err.to_string()
                );
            }
        }

        let interface = Rc::clone(descriptor.interface());
        let outcome = interface.on_unload(&self.context(descriptor));
        if let Err(err) = outcome {
            log_warn!(
                self.logger,
                "{} returned exceptional status during unload: {}",
                descriptor.name(),
                err.to_string()
            );
        }

        descriptor.state = None;

        log_info!(self.logger, "Unloaded {}", descriptor.name());

        Ok(())
    }

    /// Starts a loaded, stopped service.
    ///
    /// The service is marked started before `on_start` runs; if the hook
    /// refuses, the mark is reverted.
    pub fn start(&self, descriptor: &mut ServiceDescriptor) -> Result<(), LifecycleError> {
        log_trace!(self.logger, "Starting {}", descriptor.name());

        match descriptor.state.as_mut() {
            None => {
                log_error!(self.logger, "{} is not loaded", descriptor.name());
                return Err(LifecycleError::NotLoaded {
                    service: descriptor.name().to_string(),
                });
            }
            Some(state) if state.started => {
                log_error!(self.logger, "{} is already started", descriptor.name());
                return Err(LifecycleError::AlreadyStarted {
                    service: descriptor.name().to_string(),
                });
            }
            Some(state) => state.started = true,
        }

        let interface = Rc::clone(descriptor.interface());
        let outcome = interface.on_start(&self.context(descriptor));
        if let Err(err) = outcome {
            log_error!(
                self.logger,
                "{} aborted during start: {}",
                descriptor.name(),
                err.to_string()
            );
            if let Some(state) = descriptor.state.as_mut() {
                state.started = false;
            }
            return Err(LifecycleError::HookAbort {
                service: descriptor.name().to_string(),
                transition: Transition::Start,
                source: err,
            });
        }

        log_info!(self.logger, "Started {}", descriptor.name());

        Ok(())
    }

    /// Stops a started service.
    ///
    /// The service is marked stopped before `on_stop` runs. A failing hook is
    /// logged as a warning and does not undo the transition.
    pub fn stop(&self, descriptor: &mut ServiceDescriptor) -> Result<(), LifecycleError> {
        log_trace!(self.logger, "Stopping {}", descriptor.name());

        match descriptor.state.as_mut() {
            None => {
                log_error!(self.logger, "{} is not loaded", descriptor.name());
                return Err(LifecycleError::NotLoaded {
                    service: descriptor.name().to_string(),
                });
            }
            Some(state) if !state.started => {
                log_error!(self.logger, "{} is not started", descriptor.name());
                return Err(LifecycleError::NotStarted {
                    service: descriptor.name().to_string(),
                });
            }
            Some(state) => state.started = false,
        }

        let interface = Rc::clone(descriptor.interface());
        let outcome = interface.on_stop(&self.context(descriptor));
        if let Err(err) = outcome {
            log_warn!(
                self.logger,
                "{} returned exceptional status during stop: {}",
                descriptor.name(),
                err.to_string()
            );
        }

        log_info!(self.logger, "Stopped {}", descriptor.name());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HookError, HookResult, LifecycleState, Procedure, ServiceInterface};
    use core_types::ProcedureOrdinal;
    use services_logger::{LogLevel, MemorySink};
    use std::cell::{Cell, RefCell};
    use std::sync::Arc;

    #[derive(Default)]
    struct Switches {
        fail_load: Cell<bool>,
        fail_unload: Cell<bool>,
        fail_start: Cell<bool>,
        fail_stop: Cell<bool>,
        journal: RefCell<Vec<&'static str>>,
    }

    struct Probe(Rc<Switches>);

    impl Probe {
        fn hook(&self, name: &'static str, fail: bool) -> HookResult {
            self.0.journal.borrow_mut().push(name);
            if fail {
                Err(HookError::Rejected(name.to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl ServiceInterface for Probe {
        fn on_load(&self, _ctx: &ServiceContext<'_>) -> HookResult {
            self.hook("on_load", self.0.fail_load.get())
        }
        fn on_unload(&self, _ctx: &ServiceContext<'_>) -> HookResult {
            self.hook("on_unload", self.0.fail_unload.get())
        }
        fn on_start(&self, ctx: &ServiceContext<'_>) -> HookResult {
            assert!(ctx.is_started());
            self.hook("on_start", self.0.fail_start.get())
        }
        fn on_stop(&self, ctx: &ServiceContext<'_>) -> HookResult {
            assert!(!ctx.is_started());
            self.hook("on_stop", self.0.fail_stop.get())
        }
        fn get_proc(&self, _ctx: &ServiceContext<'_>, _ordinal: ProcedureOrdinal) -> Option<Procedure> {
            None
        }
    }

    fn setup() -> (LifecycleManager, MemorySink, ServiceDescriptor, Rc<Switches>) {
        let sink = MemorySink::new();
        let manager = LifecycleManager::new(Logger::new(Arc::new(sink.clone())));
        let switches = Rc::new(Switches::default());
        let desc = ServiceDescriptor::new(
            "probe",
            "Records hook calls.",
            Rc::new(Probe(Rc::clone(&switches))),
        );
        (manager, sink, desc, switches)
    }

    #[test]
    fn test_load_success() {
        let (manager, sink, mut desc, _) = setup();

        manager.load(&mut desc).unwrap();

        assert_eq!(desc.lifecycle_state(), LifecycleState::LoadedStopped);
        assert!(!desc.state().unwrap().is_started());
        assert_eq!(manager.loaded_count(), 1);
        assert!(sink.contains(LogLevel::Trace, "Loading probe"));
        assert!(sink.contains(LogLevel::Info, "Loaded probe"));
        assert!(sink.contains(LogLevel::Info, "Records hook calls."));
    }

    #[test]
    fn test_load_twice_keeps_first_record() {
        let (manager, sink, mut desc, switches) = setup();
        manager.load(&mut desc).unwrap();
        let first = desc.state().map(|state| state.instance());

        let err = manager.load(&mut desc).unwrap_err();

        assert_eq!(
            err,
            LifecycleError::AlreadyLoaded {
                service: "probe".to_string()
            }
        );
        assert_eq!(desc.state().map(|state| state.instance()), first);
        assert_eq!(manager.loaded_count(), 1);
        assert_eq!(*switches.journal.borrow(), vec!["on_load"]);
        assert!(sink.contains(LogLevel::Error, "probe is already loaded"));
    }

    #[test]
    fn test_load_twice_while_started() {
        let (manager, _sink, mut desc, _) = setup();
        manager.load(&mut desc).unwrap();
        manager.start(&mut desc).unwrap();

        let err = manager.load(&mut desc).unwrap_err();

        assert!(matches!(err, LifecycleError::AlreadyLoaded { .. }));
        assert_eq!(desc.lifecycle_state(), LifecycleState::LoadedStarted);
    }

    #[test]
    fn test_load_hook_abort_leaves_nothing() {
        let (manager, sink, mut desc, switches) = setup();
        switches.fail_load.set(true);

        let err = manager.load(&mut desc).unwrap_err();

        assert!(matches!(
            err,
            LifecycleError::HookAbort {
                transition: Transition::Load,
                ..
            }
        ));
        assert!(desc.state().is_none());
        assert_eq!(manager.loaded_count(), 0);
        assert!(sink.contains(
            LogLevel::Error,
            "probe aborted during load: rejected: on_load"
        ));

        switches.fail_load.set(false);
        manager.load(&mut desc).unwrap();
        assert!(desc.is_loaded());
    }

    #[test]
    fn test_load_allocation_failure() {
        let sink = MemorySink::new();
        let manager = LifecycleManager::new(Logger::new(Arc::new(sink.clone())))
            .with_budget(StateBudget::Limited(0));
        let switches = Rc::new(Switches::default());
        let mut desc = ServiceDescriptor::new("probe", "", Rc::new(Probe(Rc::clone(&switches))));

        let err = manager.load(&mut desc).unwrap_err();

        assert_eq!(
            err,
            LifecycleError::AllocationFailure {
                service: "probe".to_string()
            }
        );
        assert!(desc.state().is_none());
        assert!(switches.journal.borrow().is_empty());
        assert!(sink.contains(LogLevel::Error, "probe state alloc failed"));
    }

    #[test]
    fn test_dropped_descriptor_returns_its_slot() {
        let manager =
            LifecycleManager::new(Logger::null()).with_budget(StateBudget::Limited(1));
        let switches = Rc::new(Switches::default());
        let mut first = ServiceDescriptor::new("first", "", Rc::new(Probe(Rc::clone(&switches))));
        let mut second = ServiceDescriptor::new("second", "", Rc::new(Probe(Rc::clone(&switches))));

        manager.load(&mut first).unwrap();
        drop(first);

        assert_eq!(manager.loaded_count(), 0);
        manager.load(&mut second).unwrap();
        assert_eq!(manager.loaded_count(), 1);
    }

    #[test]
    fn test_unload_by_other_manager_returns_slot_to_issuer() {
        let issuer =
            LifecycleManager::new(Logger::null()).with_budget(StateBudget::Limited(1));
        let other = LifecycleManager::new(Logger::null());
        let switches = Rc::new(Switches::default());
        let mut first = ServiceDescriptor::new("first", "", Rc::new(Probe(Rc::clone(&switches))));
        let mut second = ServiceDescriptor::new("second", "", Rc::new(Probe(Rc::clone(&switches))));

        issuer.load(&mut first).unwrap();
        other.unload(&mut first).unwrap();

        assert!(!first.is_loaded());
        assert_eq!(issuer.loaded_count(), 0);
        assert_eq!(other.loaded_count(), 0);
        issuer.load(&mut second).unwrap();
        assert_eq!(issuer.loaded_count(), 1);
    }

    #[test]
    fn test_start_preconditions() {
        let (manager, _sink, mut desc, _) = setup();

        assert!(matches!(
            manager.start(&mut desc),
            Err(LifecycleError::NotLoaded { .. })
        ));

        manager.load(&mut desc).unwrap();
        manager.start(&mut desc).unwrap();
        assert_eq!(desc.lifecycle_state(), LifecycleState::LoadedStarted);

        assert!(matches!(
            manager.start(&mut desc),
            Err(LifecycleError::AlreadyStarted { .. })
        ));
        assert_eq!(desc.lifecycle_state(), LifecycleState::LoadedStarted);
    }

    #[test]
    fn test_start_hook_abort_reverts() {
        let (manager, sink, mut desc, switches) = setup();
        manager.load(&mut desc).unwrap();
        switches.fail_start.set(true);

        let err = manager.start(&mut desc).unwrap_err();

        assert!(matches!(
            err,
            LifecycleError::HookAbort {
                transition: Transition::Start,
                ..
            }
        ));
        assert_eq!(desc.lifecycle_state(), LifecycleState::LoadedStopped);
        assert!(sink.contains(
            LogLevel::Error,
            "probe aborted during start: rejected: on_start"
        ));
    }

    #[test]
    fn test_stop_preconditions() {
        let (manager, _sink, mut desc, _) = setup();

        assert!(matches!(
            manager.stop(&mut desc),
            Err(LifecycleError::NotLoaded { .. })
        ));

        manager.load(&mut desc).unwrap();
        assert!(matches!(
            manager.stop(&mut desc),
            Err(LifecycleError::NotStarted { .. })
        ));
    }

    #[test]
    fn test_stop_is_best_effort() {
        let (manager, sink, mut desc, switches) = setup();
        manager.load(&mut desc).unwrap();
        manager.start(&mut desc).unwrap();
        switches.fail_stop.set(true);

        manager.stop(&mut desc).unwrap();

        assert_eq!(desc.lifecycle_state(), LifecycleState::LoadedStopped);
        assert!(sink.contains(
            LogLevel::Warn,
            "probe returned exceptional status during stop: rejected: on_stop"
        ));
        assert!(sink.contains(LogLevel::Info, "Stopped probe"));
    }

    #[test]
    fn test_unload_not_loaded() {
        let (manager, sink, mut desc, switches) = setup();

        let err = manager.unload(&mut desc).unwrap_err();

        assert_eq!(
            err,
            LifecycleError::NotLoaded {
                service: "probe".to_string()
            }
        );
        assert!(switches.journal.borrow().is_empty());
        assert!(sink.contains(LogLevel::Error, "probe is not loaded"));
    }

    #[test]
    fn test_unload_started_stops_first_and_ignores_failures() {
        let (manager, sink, mut desc, switches) = setup();
        manager.load(&mut desc).unwrap();
        manager.start(&mut desc).unwrap();
        switches.fail_stop.set(true);
        switches.fail_unload.set(true);

        manager.unload(&mut desc).unwrap();

        assert_eq!(desc.lifecycle_state(), LifecycleState::Unloaded);
        assert_eq!(manager.loaded_count(), 0);
        assert_eq!(
            *switches.journal.borrow(),
            vec!["on_load", "on_start", "on_stop", "on_unload"]
        );
        assert!(sink.contains(
            LogLevel::Trace,
            "probe is still started, so stopping it before unload"
        ));
        assert_eq!(sink.messages_at(LogLevel::Warn).len(), 2);
    }

    #[test]
    fn test_manager_never_logs_fatal() {
        let (manager, sink, mut desc, switches) = setup();
        switches.fail_load.set(true);
        let _ = manager.load(&mut desc);
        let _ = manager.start(&mut desc);
        let _ = manager.stop(&mut desc);
        let _ = manager.unload(&mut desc);

        assert!(sink.messages_at(LogLevel::Fatal).is_empty());
    }

    #[test]
    fn test_manager_records_are_tagged() {
        let (manager, sink, mut desc, _) = setup();
        manager.load(&mut desc).unwrap();

        assert!(sink
            .records()
            .iter()
            .all(|record| record.source.as_deref() == Some(LOG_TAG)));
    }
}
