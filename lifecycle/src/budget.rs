//! State record budget
//!
//! Each loaded service holds one state record. A manager can be limited to a
//! fixed number of live records; a load that would exceed the limit fails
//! with `AllocationFailure`.
//!
//! Every record carries a [`Slot`] that returns itself to the issuing ledger
//! when the record is dropped, so the count stays exact no matter who ends up
//! destroying the record.

use crate::ServiceState;
use std::cell::Cell;
use std::rc::Rc;

/// Limit on live state records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateBudget {
    /// No limit
    #[default]
    Unlimited,
    /// At most this many services loaded at once
    Limited(usize),
}

impl StateBudget {
    /// Checks whether one more record fits when `live` already exist
    pub fn admits(&self, live: usize) -> bool {
        match self {
            StateBudget::Unlimited => true,
            StateBudget::Limited(max) => live < *max,
        }
    }
}

/// One occupied place in a ledger, held by a state record
#[derive(Debug)]
pub(crate) struct Slot {
    live: Rc<Cell<usize>>,
}

impl Drop for Slot {
    fn drop(&mut self) {
        self.live.set(self.live.get().saturating_sub(1));
    }
}

/// Accounting for records handed out by one manager
#[derive(Debug, Default)]
pub(crate) struct StateLedger {
    budget: StateBudget,
    live: Rc<Cell<usize>>,
    issued: Cell<u64>,
}

impl StateLedger {
    pub(crate) fn new(budget: StateBudget) -> Self {
        Self {
            budget,
            live: Rc::new(Cell::new(0)),
            issued: Cell::new(0),
        }
    }

    pub(crate) fn budget(&self) -> StateBudget {
        self.budget
    }

    pub(crate) fn live(&self) -> usize {
        self.live.get()
    }

    /// Reserves a slot and creates a fresh record holding it
    pub(crate) fn allocate(&self) -> Option<ServiceState> {
        if !self.budget.admits(self.live.get()) {
            return None;
        }
        let instance = self.issued.get().wrapping_add(1);
        self.issued.set(instance);
        self.live.set(self.live.get() + 1);
        let slot = Slot {
            live: Rc::clone(&self.live),
        };
        Some(ServiceState::new(instance, slot))
    }
}
