//! Greedy assignment and run reporting.
//!
//! # Algorithm
//!
//! `GreedyAssigner` walks the backlog in dependency-then-priority order
//! and commits each task to the best-scoring employee with capacity left.
//! It is not globally optimal and never revisits a commitment.
//!
//! # Reporting
//!
//! `AssignmentSummary` reports assigned/unassigned counts and per-employee
//! utilization.

mod greedy;
mod ledger;
mod summary;

pub use greedy::{AssignmentOutcome, AssignmentRequest, GreedyAssigner};
pub use ledger::CapacityLedger;
pub use summary::{AssignmentSummary, EmployeeWorkload};
