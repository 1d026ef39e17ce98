//! Matching context for criterion evaluation.

/// Run state for one employee while a task is being matched.
///
/// Carries the hours already committed to the employee in the current
/// run, taken from the run's ledger rather than from the employee record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchContext {
    /// Hours committed to the employee so far in this run.
    pub committed_hours: f64,
}

impl MatchContext {
    /// Context for an employee with nothing committed.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Context with the given committed hours.
    pub fn with_committed(committed_hours: f64) -> Self {
        Self { committed_hours }
    }

    /// Capacity left for `availability_hours` (may be zero or negative).
    #[inline]
    pub fn remaining(&self, availability_hours: f64) -> f64 {
        availability_hours - self.committed_hours
    }
}
