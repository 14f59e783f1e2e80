//! Procedure ordinals

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects one procedure within a single service's namespace.
///
/// The meaning of an ordinal is private to the service that defines it.
/// Nothing outside that service interprets the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProcedureOrdinal(pub i32);

impl ProcedureOrdinal {
    /// Creates an ordinal from its raw value
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw value
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ProcedureOrdinal {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProcedureOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
