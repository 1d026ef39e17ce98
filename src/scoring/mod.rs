//! Employee-task compatibility scoring.
//!
//! Provides matching criteria (skill overlap, experience fit, availability)
//! and a weighted scorer that combines them into a composite score.
//!
//! # Usage
//!
//! ```
//! use u_assign::models::{Employee, ExperienceLevel, Task};
//! use u_assign::scoring::{MatchContext, Scorer};
//!
//! let scorer = Scorer::standard();
//! let task = Task::new("T1", 10.0).with_required_skill("python");
//! let employee = Employee::new("E1", ExperienceLevel::Mid)
//!     .with_skill("python")
//!     .with_availability(20.0);
//!
//! let score = scorer.score(&task, &employee, &MatchContext::idle());
//! assert!((score - 1.0).abs() < 1e-10);
//! ```
//!
//! # Score Convention
//! **Higher score = better match.** Every built-in criterion returns a
//! value in `0.0..=1.0`; the composite is their weighted sum.

mod context;
pub mod criteria;
mod scorer;

pub use context::MatchContext;
pub use scorer::{CriterionScore, ScoreWeights, Scorer};

use crate::models::{Employee, Task};
use std::fmt::Debug;

/// Score returned by a matching criterion.
pub type MatchScore = f64;

/// A criterion rating how well an employee fits a task.
///
/// # Score Convention
/// **Higher score = better fit.**
pub trait MatchCriterion: Send + Sync + Debug {
    /// Criterion name (e.g., "skill").
    fn name(&self) -> &'static str;

    /// Rates `employee` for `task` given the employee's committed hours.
    fn evaluate(&self, task: &Task, employee: &Employee, context: &MatchContext) -> MatchScore;

    /// Criterion description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
