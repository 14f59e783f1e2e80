//! # Runtime
//!
//! Bring-up and tear-down of the built-in services.

use crate::config::{LogOutput, RuntimeConfig};
use core_types::{
    console_service_id, face_service_id, monitor_service_id, scripting_service_id,
    speech_service_id, ProcedureOrdinal, ServiceId,
};
use lifecycle::{LifecycleError, LifecycleManager, LifecycleState, ServiceDescriptor};
use serde::Serialize;
use serde_json::Value;
use services_logger::{
    log_debug, log_info, log_warn, LogSink, Logger, StdoutSink, TracingSink,
};
use services_registry::{RegistryError, ServiceRegistry};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

const LOG_TAG: &str = "main";

/// Runtime error types
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Snapshot of one service, in registration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub name: String,
    pub state: LifecycleState,
}

/// The built-in services in bring-up order
pub fn builtin_descriptors() -> Vec<ServiceDescriptor> {
    vec![
        services_console::descriptor(),
        services_face::descriptor(),
        services_monitor::descriptor(),
        services_scripting::descriptor(),
        services_speech::descriptor(),
    ]
}

/// Greeting procedure of each built-in service, keyed by service id
pub fn builtin_greetings() -> HashMap<ServiceId, ProcedureOrdinal> {
    HashMap::from([
        (console_service_id(), services_console::HELLO),
        (face_service_id(), services_face::HELLO),
        (monitor_service_id(), services_monitor::HELLO),
        (scripting_service_id(), services_scripting::HELLO),
        (speech_service_id(), services_speech::HELLO),
    ])
}

/// Owns the manager and the descriptors it drives
pub struct Runtime {
    config: RuntimeConfig,
    logger: Logger,
    manager: LifecycleManager,
    registry: ServiceRegistry,
    greetings: HashMap<ServiceId, ProcedureOrdinal>,
}

impl Runtime {
    /// Creates a runtime logging to the configured output
    pub fn new(config: RuntimeConfig) -> Result<Self, RuntimeError> {
        let sink: Arc<dyn LogSink> = match config.output {
            LogOutput::Stdout => Arc::new(StdoutSink),
            LogOutput::Tracing => Arc::new(TracingSink),
        };
        let logger = Logger::new(sink).with_min_level(config.min_level);
        Self::with_logger(config, logger)
    }

    /// Creates a runtime logging to `logger`
    pub fn with_logger(config: RuntimeConfig, logger: Logger) -> Result<Self, RuntimeError> {
        Self::with_descriptors(config, logger, builtin_descriptors())
    }

    /// Creates a runtime driving `descriptors` in the given order
    pub fn with_descriptors(
        config: RuntimeConfig,
        logger: Logger,
        descriptors: Vec<ServiceDescriptor>,
    ) -> Result<Self, RuntimeError> {
        let mut registry = ServiceRegistry::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }

        Ok(Self {
            manager: LifecycleManager::new(logger.clone()),
            logger: logger.with_source(LOG_TAG),
            config,
            registry,
            greetings: builtin_greetings(),
        })
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn manager(&self) -> &LifecycleManager {
        &self.manager
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Current state of every service
    pub fn status(&self) -> Vec<ServiceStatus> {
        self.registry
            .descriptors()
            .iter()
            .map(|d| ServiceStatus {
                name: d.name().to_string(),
                state: d.lifecycle_state(),
            })
            .collect()
    }

    /// Loads and starts every service in order.
    ///
    /// Stops at the first failure. Services brought up before the failure
    /// stay up; call [`tear_down`](Self::tear_down) to release them.
    pub fn bring_up(&mut self) -> Result<(), RuntimeError> {
        log_info!(self.logger, "Bringing up {} services", self.registry.count());

        for descriptor in self.registry.descriptors_mut() {
            self.manager.load(descriptor)?;
            self.manager.start(descriptor)?;
        }

        Ok(())
    }

    /// Calls each loaded service's hello procedure once.
    ///
    /// Services without a known greeting are skipped. Returns how many calls
    /// succeeded. Failures are logged, not returned.
    pub fn exercise(&self) -> usize {
        if !self.config.call_hello {
            log_debug!(self.logger, "Skipping hello calls");
            return 0;
        }

        let mut greeted = 0;
        for descriptor in self.registry.descriptors() {
            if !descriptor.is_loaded() {
                continue;
            }
            let Some(&hello) = self.greetings.get(&descriptor.id()) else {
                log_debug!(self.logger, "{} has no greeting", descriptor.name());
                continue;
            };
            let mut output = Value::Null;
            match self.manager.call(descriptor, hello, &Value::Null, &mut output) {
                Ok(()) => greeted += 1,
                Err(err) => log_warn!(self.logger, "Hello failed: {}", err.to_string()),
            }
        }
        greeted
    }

    /// Stops and unloads every loaded service, last registered first.
    ///
    /// Never fails; both transitions are best-effort once preconditions hold.
    pub fn tear_down(&mut self) {
        log_info!(self.logger, "Tearing down services");

        for descriptor in self.registry.descriptors_mut().iter_mut().rev() {
            if descriptor.is_started() {
                let _ = self.manager.stop(descriptor);
            }
            if descriptor.is_loaded() {
                let _ = self.manager.unload(descriptor);
            }
        }
    }

    /// Runs bring-up, hello calls and tear-down.
    ///
    /// On a bring-up failure the services already up are torn down before
    /// the error is returned.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        if let Err(err) = self.bring_up() {
            self.tear_down();
            return Err(err);
        }
        self.exercise();
        self.tear_down();
        Ok(())
    }
}
