//! Skill-aware task assignment for the U-Engine ecosystem.
//!
//! Assigns a backlog of tasks to a roster of employees. Tasks are ordered
//! by dependencies and priority, then each is committed greedily to the
//! employee with the best weighted score over skill overlap, experience
//! fit, and remaining capacity.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Employee`, `Task`, `Assignment`,
//!   `ExperienceLevel`, `Priority`, `Complexity`
//! - **`ordering`**: Dependency-respecting, priority-sorted task order
//! - **`scoring`**: Matching criteria and the weighted `Scorer`
//! - **`assigner`**: `GreedyAssigner`, `CapacityLedger`, `AssignmentSummary`
//! - **`engine`**: `TaskAssigner`, a stateful roster/backlog owner
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown
//!   dependencies, DAG cycles, bad estimates)
//! - **`document`**: JSON project documents and assignment exports
//! - **`planning`**: Converts planner steps and milestones into tasks
//! - **`sample`**: Demo roster and backlog
//!
//! # Example
//!
//! ```
//! use u_assign::models::{Complexity, Employee, ExperienceLevel, Priority, Task};
//! use u_assign::TaskAssigner;
//!
//! let mut engine = TaskAssigner::new();
//! engine.add_employee(
//!     Employee::new("E1", ExperienceLevel::Senior)
//!         .with_name("Alice")
//!         .with_skill("python")
//!         .with_availability(20.0),
//! );
//! engine.add_employee(
//!     Employee::new("E2", ExperienceLevel::Senior)
//!         .with_name("Bob")
//!         .with_availability(20.0),
//! );
//! engine.add_task(
//!     Task::new("T1", 10.0)
//!         .with_required_skill("python")
//!         .with_priority(Priority::High)
//!         .with_complexity(Complexity::Moderate),
//! );
//!
//! engine.assign().unwrap();
//! let summary = engine.summary();
//! assert_eq!(summary.assignments[0].employee_id, "E1");
//! assert!((summary.workload_for("E1").unwrap().utilization_percentage - 50.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod assigner;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod models;
pub mod ordering;
pub mod planning;
pub mod sample;
pub mod scoring;
pub mod validation;

pub use config::AssignConfig;
pub use engine::TaskAssigner;
pub use error::{AssignError, Result};
