//! Committed-hours accumulator for a single assignment run.

use crate::models::Employee;
use crate::scoring::MatchContext;

/// Hours committed to each roster slot during a run.
///
/// Slots are roster positions, not employee ids, so two employees that
/// share an id are still tracked separately. Every run starts from a
/// fresh, all-zero ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapacityLedger {
    committed: Vec<f64>,
}

impl CapacityLedger {
    /// A zeroed ledger for a roster of `len` employees.
    pub fn new(len: usize) -> Self {
        Self {
            committed: vec![0.0; len],
        }
    }

    /// Hours committed to the employee at `slot`.
    pub fn committed(&self, slot: usize) -> f64 {
        self.committed.get(slot).copied().unwrap_or(0.0)
    }

    /// Adds `hours` to the employee at `slot`.
    pub fn commit(&mut self, slot: usize, hours: f64) {
        if let Some(c) = self.committed.get_mut(slot) {
            *c += hours;
        }
    }

    /// Whether the employee at `slot` has reached their availability.
    pub fn is_exhausted(&self, slot: usize, employee: &Employee) -> bool {
        self.committed(slot) >= employee.availability_hours
    }

    /// Scoring context for the employee at `slot`.
    pub fn context(&self, slot: usize) -> MatchContext {
        MatchContext::with_committed(self.committed(slot))
    }

    /// Total hours committed across the roster.
    pub fn total_committed(&self) -> f64 {
        self.committed.iter().sum()
    }

    /// Number of roster slots.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Writes committed hours into `employees[slot].current_workload`.
    pub fn apply_to(&self, employees: &mut [Employee]) {
        for (employee, &hours) in employees.iter_mut().zip(&self.committed) {
            employee.current_workload = hours;
        }
    }
}
