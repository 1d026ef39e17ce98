//! Greedy skill-aware assigner.
//!
//! # Algorithm
//!
//! 1. Order tasks by dependencies, then stably by priority (descending).
//! 2. For each task, score every employee with remaining capacity.
//! 3. Pick the strictly highest composite score; the first employee in
//!    roster order wins exact ties.
//! 4. Commit the task's estimated hours to that employee before moving on.
//!
//! Tasks with no eligible employee are left out of the result.
//!
//! # Complexity
//! O(T * E * c) where T=tasks, E=employees, c=criteria.

use tracing::{debug, info};

use super::CapacityLedger;
use crate::config::AssignConfig;
use crate::error::{AssignError, Result};
use crate::models::{Assignment, Employee, Task};
use crate::ordering;
use crate::scoring::Scorer;
use crate::validation;

/// Input container for an assignment run.
#[derive(Debug, Clone, Default)]
pub struct AssignmentRequest {
    /// Roster.
    pub employees: Vec<Employee>,
    /// Backlog.
    pub tasks: Vec<Task>,
}

impl AssignmentRequest {
    /// Creates a new request.
    pub fn new(employees: Vec<Employee>, tasks: Vec<Task>) -> Self {
        Self { employees, tasks }
    }
}

/// Result of an assignment run.
///
/// The run does not touch its inputs: committed hours live in
/// [`ledger`](Self::ledger) and can be written back with
/// [`apply_to`](Self::apply_to).
#[derive(Debug, Clone, Default)]
pub struct AssignmentOutcome {
    /// Indices into the task slice, in the order tasks were considered.
    pub order: Vec<usize>,
    /// Assignments, in commit order.
    pub assignments: Vec<Assignment>,
    /// Hours committed per roster slot.
    pub ledger: CapacityLedger,
}

impl AssignmentOutcome {
    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Finds the assignment for a task.
    pub fn assignment_for_task(&self, task_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.task_id == task_id)
    }

    /// Returns all assignments for an employee.
    pub fn assignments_for_employee(&self, employee_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .collect()
    }

    /// Whether a task was assigned.
    pub fn is_assigned(&self, task_id: &str) -> bool {
        self.assignment_for_task(task_id).is_some()
    }

    /// IDs of `tasks` that received no assignment, in backlog order.
    pub fn unassigned_task_ids<'a>(&self, tasks: &'a [Task]) -> Vec<&'a str> {
        tasks
            .iter()
            .filter(|t| !self.is_assigned(&t.id))
            .map(|t| t.id.as_str())
            .collect()
    }

    /// Writes committed hours into each employee's `current_workload`.
    ///
    /// `employees` must be the roster the run was computed on.
    pub fn apply_to(&self, employees: &mut [Employee]) {
        self.ledger.apply_to(employees);
    }

    /// A copy of `employees` with workloads from this run.
    pub fn updated_employees(&self, employees: &[Employee]) -> Vec<Employee> {
        let mut updated = employees.to_vec();
        self.apply_to(&mut updated);
        updated
    }
}

/// Greedy task assigner.
///
/// # Example
///
/// ```
/// use u_assign::assigner::GreedyAssigner;
/// use u_assign::models::{Complexity, Employee, ExperienceLevel, Priority, Task};
///
/// let employees = vec![
///     Employee::new("E1", ExperienceLevel::Senior).with_skill("python").with_availability(20.0),
///     Employee::new("E2", ExperienceLevel::Senior).with_availability(20.0),
/// ];
/// let tasks = vec![Task::new("T1", 10.0)
///     .with_required_skill("python")
///     .with_priority(Priority::High)
///     .with_complexity(Complexity::Moderate)];
///
/// let outcome = GreedyAssigner::new().assign(&employees, &tasks).unwrap();
/// assert_eq!(outcome.assignments[0].employee_id, "E1");
/// assert!((outcome.ledger.committed(0) - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAssigner {
    scorer: Scorer,
    strict: bool,
}

impl GreedyAssigner {
    /// Creates an assigner with the standard scorer, lenient input handling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assigner from a run configuration.
    pub fn from_config(config: &AssignConfig) -> Self {
        Self {
            scorer: Scorer::from_weights(config.weights),
            strict: config.strict,
        }
    }

    /// Replaces the scorer.
    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Enables or disables strict validation before each run.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The scorer used to rank candidates.
    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Assigns `tasks` to `employees`.
    ///
    /// Employee `current_workload` values are ignored; every run starts
    /// from zero committed hours.
    ///
    /// # Errors
    /// - [`AssignError::CircularDependency`] if the backlog has a cycle.
    /// - [`AssignError::Validation`] in strict mode, on any contract violation.
    pub fn assign(&self, employees: &[Employee], tasks: &[Task]) -> Result<AssignmentOutcome> {
        if self.strict {
            validation::validate_input(employees, tasks).map_err(AssignError::Validation)?;
        }

        debug!(
            tasks = tasks.len(),
            employees = employees.len(),
            "starting assignment run"
        );

        let order = ordering::assignment_order(tasks)?;
        let mut ledger = CapacityLedger::new(employees.len());
        let mut assignments = Vec::new();

        for &task_idx in &order {
            let task = &tasks[task_idx];

            let Some((slot, score)) = self.best_candidate(task, employees, &ledger) else {
                debug!(task_id = %task.id, "no eligible employee");
                continue;
            };

            let employee = &employees[slot];
            ledger.commit(slot, task.estimated_hours);
            assignments.push(Assignment::new(&task.id, &employee.id, task.estimated_hours));

            debug!(
                task_id = %task.id,
                employee_id = %employee.id,
                score,
                committed = ledger.committed(slot),
                "task assigned"
            );
        }

        info!(
            assigned = assignments.len(),
            unassigned = order.len() - assignments.len(),
            "assignment run complete"
        );

        Ok(AssignmentOutcome {
            order,
            assignments,
            ledger,
        })
    }

    /// Runs [`assign`](Self::assign) on a request.
    pub fn assign_request(&self, request: &AssignmentRequest) -> Result<AssignmentOutcome> {
        self.assign(&request.employees, &request.tasks)
    }

    /// Roster slot and score of the best employee for `task`.
    ///
    /// Employees whose committed hours have reached their availability
    /// are skipped. Returns `None` when nobody is eligible.
    pub fn best_candidate(
        &self,
        task: &Task,
        employees: &[Employee],
        ledger: &CapacityLedger,
    ) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;

        for (slot, employee) in employees.iter().enumerate() {
            if ledger.is_exhausted(slot, employee) {
                continue;
            }

            let score = self.scorer.score(task, employee, &ledger.context(slot));
            // Strict comparison: the earlier employee keeps exact ties.
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((slot, score));
            }
        }

        best
    }
}
