//! # Cozmonaut Daemon
//!
//! Composition root for the Cozmonaut robot services.
//!
//! ## Responsibilities
//!
//! - Builds the logger, the lifecycle manager and the registry
//! - Registers the built-in services in a fixed order
//! - Brings them up (load, start), greets each once, and tears them down
//!   (stop, unload) in reverse order
//!
//! ## Non-Responsibilities
//!
//! The daemon does NOT:
//! - Discover services at runtime
//! - Read configuration files or environment variables
//! - Run services concurrently

pub mod config;
pub mod runtime;

pub use config::{parse_args, ConfigError, LogOutput, RuntimeConfig};
pub use runtime::{builtin_descriptors, builtin_greetings, Runtime, RuntimeError, ServiceStatus};
