//! # Service Registry
//!
//! This crate holds the descriptors a composition root owns.
//!
//! ## Philosophy
//!
//! The registry is not a discovery mechanism. The composition root decides
//! which services exist and registers them in the order it wants them
//! driven; the registry only keeps that order and guarantees that names and
//! ids are unique.

use core_types::ServiceId;
use lifecycle::ServiceDescriptor;
use std::collections::HashMap;
use thiserror::Error;

/// Error types for registry operations
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Service id already registered
    #[error("Service already registered: {0}")]
    AlreadyRegistered(ServiceId),
    /// Service name already registered
    #[error("Service name already registered: {0}")]
    NameAlreadyRegistered(String),
    /// Service name not found
    #[error("Service not found: {0}")]
    NameNotFound(String),
    /// Service must be unloaded before it is removed
    #[error("Service still loaded: {0}")]
    StillLoaded(String),
}

/// Ordered set of service descriptors
pub struct ServiceRegistry {
    /// Descriptors in registration order
    services: Vec<ServiceDescriptor>,
    /// Name lookup table
    names: HashMap<String, ServiceId>,
}

impl ServiceRegistry {
    /// Creates a new service registry
    pub fn new() -> Self {
        Self {
            services: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Appends a descriptor
    pub fn register(&mut self, descriptor: ServiceDescriptor) -> Result<(), RegistryError> {
        if self.names.contains_key(descriptor.name()) {
            return Err(RegistryError::NameAlreadyRegistered(
                descriptor.name().to_string(),
            ));
        }
        if self.services.iter().any(|d| d.id() == descriptor.id()) {
            return Err(RegistryError::AlreadyRegistered(descriptor.id()));
        }
        self.names
            .insert(descriptor.name().to_string(), descriptor.id());
        self.services.push(descriptor);
        Ok(())
    }

    fn position(&self, name: &str) -> Result<usize, RegistryError> {
        let id = self
            .names
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::NameNotFound(name.to_string()))?;
        self.services
            .iter()
            .position(|d| d.id() == id)
            .ok_or_else(|| RegistryError::NameNotFound(name.to_string()))
    }

    /// Looks up a descriptor by name
    pub fn get(&self, name: &str) -> Result<&ServiceDescriptor, RegistryError> {
        let index = self.position(name)?;
        Ok(&self.services[index])
    }

    /// Looks up a descriptor by name for a lifecycle operation
    pub fn get_mut(&mut self, name: &str) -> Result<&mut ServiceDescriptor, RegistryError> {
        let index = self.position(name)?;
        Ok(&mut self.services[index])
    }

    /// Removes an unloaded descriptor
    pub fn unregister(&mut self, name: &str) -> Result<ServiceDescriptor, RegistryError> {
        let index = self.position(name)?;
        if self.services[index].is_loaded() {
            return Err(RegistryError::StillLoaded(name.to_string()));
        }
        self.names.remove(name);
        Ok(self.services.remove(index))
    }

    /// Descriptors in registration order
    pub fn descriptors(&self) -> &[ServiceDescriptor] {
        &self.services
    }

    /// Descriptors in registration order, mutably
    pub fn descriptors_mut(&mut self) -> &mut [ServiceDescriptor] {
        &mut self.services
    }

    /// Names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.services.iter().map(ServiceDescriptor::name).collect()
    }

    /// Returns the number of registered services
    pub fn count(&self) -> usize {
        self.services.len()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
