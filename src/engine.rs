//! Stateful assignment engine.
//!
//! [`TaskAssigner`] owns a roster, a backlog, and the assignments of the
//! latest run. Each [`assign`](TaskAssigner::assign) call recomputes from
//! scratch, writes the run's committed hours into the roster, and replaces
//! the stored assignment list.
//!
//! Not synchronized: callers must serialize access to one engine.

use tracing::debug;

use crate::assigner::{AssignmentSummary, GreedyAssigner};
use crate::config::AssignConfig;
use crate::document::{AssignmentExport, ProjectDocument};
use crate::error::Result;
use crate::models::{Assignment, Employee, Task};

/// Roster, backlog, and latest assignments.
///
/// # Example
///
/// ```
/// use u_assign::TaskAssigner;
/// use u_assign::models::{Employee, ExperienceLevel, Task};
///
/// let mut engine = TaskAssigner::new();
/// engine.add_employee(Employee::new("E1", ExperienceLevel::Mid).with_availability(40.0));
/// engine.add_task(Task::new("T1", 8.0));
///
/// let assignments = engine.assign().unwrap();
/// assert_eq!(assignments.len(), 1);
/// assert_eq!(engine.summary().unassigned_tasks, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskAssigner {
    employees: Vec<Employee>,
    tasks: Vec<Task>,
    assignments: Vec<Assignment>,
    assigner: GreedyAssigner,
}

impl TaskAssigner {
    /// Empty engine with the standard scorer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty engine using `config`.
    pub fn with_config(config: &AssignConfig) -> Self {
        Self {
            assigner: GreedyAssigner::from_config(config),
            ..Self::default()
        }
    }

    /// Empty engine with a custom assigner.
    pub fn with_assigner(assigner: GreedyAssigner) -> Self {
        Self {
            assigner,
            ..Self::default()
        }
    }

    /// Appends an employee.
    ///
    /// Ids are not checked for uniqueness. Duplicates are tracked per
    /// roster slot; strict mode rejects them at [`assign`](Self::assign).
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Appends a task. Same id contract as [`add_employee`](Self::add_employee).
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Replaces the task with the same id, returning the old one.
    ///
    /// Appends the task when no task has that id.
    pub fn replace_task(&mut self, task: Task) -> Option<Task> {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => Some(std::mem::replace(slot, task)),
            None => {
                self.tasks.push(task);
                None
            }
        }
    }

    /// Roster, with workloads from the latest run.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Backlog.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Assignments from the latest run.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Finds an employee by id.
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Finds a task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Runs the greedy assignment over the current roster and backlog.
    ///
    /// On success, every employee's `current_workload` is set to the hours
    /// committed in this run and the stored assignments are replaced.
    /// On failure, the engine is left unchanged.
    ///
    /// # Errors
    /// [`AssignError::CircularDependency`](crate::AssignError::CircularDependency)
    /// if the backlog has a cycle, or a validation error in strict mode.
    pub fn assign(&mut self) -> Result<&[Assignment]> {
        let outcome = self.assigner.assign(&self.employees, &self.tasks)?;
        outcome.apply_to(&mut self.employees);
        self.assignments = outcome.assignments;
        Ok(&self.assignments)
    }

    /// Summary of the latest run.
    pub fn summary(&self) -> AssignmentSummary {
        AssignmentSummary::calculate(&self.employees, &self.tasks, &self.assignments)
    }

    /// Assignments plus summary, ready to serialize.
    pub fn export(&self) -> AssignmentExport {
        AssignmentExport {
            assignments: self.assignments.clone(),
            summary: self.summary(),
        }
    }

    /// Replaces roster and backlog with a document's, clearing assignments.
    pub fn load_document(&mut self, document: ProjectDocument) {
        debug!(
            employees = document.employees.len(),
            tasks = document.tasks.len(),
            "loading project document"
        );
        self.employees = document.employees;
        self.tasks = document.tasks;
        self.assignments.clear();
    }

    /// Snapshot of roster and backlog.
    pub fn to_document(&self) -> ProjectDocument {
        ProjectDocument::new(self.employees.clone(), self.tasks.clone())
    }

    /// Removes all employees, tasks, and assignments.
    pub fn clear(&mut self) {
        self.employees.clear();
        self.tasks.clear();
        self.assignments.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssignError;
    use crate::models::{Complexity, ExperienceLevel, Priority};
    use crate::sample;

    fn scenario() -> TaskAssigner {
        let mut engine = TaskAssigner::new();
        engine.add_employee(
            Employee::new("E1", ExperienceLevel::Senior)
                .with_skill("python")
                .with_availability(20.0),
        );
        engine.add_employee(Employee::new("E2", ExperienceLevel::Senior).with_availability(20.0));
        engine.add_task(
            Task::new("T1", 10.0)
                .with_required_skill("python")
                .with_priority(Priority::High)
                .with_complexity(Complexity::Moderate),
        );
        engine
    }

    #[test]
    fn test_python_scenario() {
        let mut engine = scenario();
        let assignments = engine.assign().unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].employee_id, "E1");

        let e1 = engine.employee("E1").unwrap();
        assert!((e1.current_workload - 10.0).abs() < 1e-10);

        let summary = engine.summary();
        assert_eq!(summary.assigned_tasks, 1);
        assert_eq!(summary.unassigned_tasks, 0);
        let w = summary.workload_for("E1").unwrap();
        assert!((w.utilization_percentage - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let mut engine = TaskAssigner::new();
        let (employees, tasks) = (sample::sample_employees(), sample::sample_tasks());
        employees.into_iter().for_each(|e| engine.add_employee(e));
        tasks.into_iter().for_each(|t| engine.add_task(t));

        let first = engine.assign().unwrap().to_vec();
        let workloads: Vec<f64> = engine.employees().iter().map(|e| e.current_workload).collect();

        let second = engine.assign().unwrap().to_vec();
        let again: Vec<f64> = engine.employees().iter().map(|e| e.current_workload).collect();

        assert_eq!(first, second);
        assert_eq!(workloads, again);
    }

    #[test]
    fn test_assignments_replaced_not_merged() {
        let mut engine = scenario();
        engine.assign().unwrap();
        engine.replace_task(
            Task::new("T1", 4.0)
                .with_required_skill("python")
                .with_priority(Priority::High),
        );
        engine.assign().unwrap();
        assert_eq!(engine.assignments().len(), 1);
        assert!((engine.assignments()[0].assigned_hours - 4.0).abs() < 1e-10);
        assert!((engine.employee("E1").unwrap().current_workload - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_cycle_leaves_engine_unchanged() {
        let mut engine = scenario();
        engine.assign().unwrap();
        let before = engine.assignments().to_vec();

        engine.add_task(Task::new("X", 1.0).with_dependency("Y"));
        engine.add_task(Task::new("Y", 1.0).with_dependency("X"));

        let err = engine.assign().unwrap_err();
        assert!(matches!(err, AssignError::CircularDependency { .. }));
        assert_eq!(engine.assignments(), before.as_slice());
        assert!((engine.employee("E1").unwrap().current_workload - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_replace_task_appends_when_missing() {
        let mut engine = TaskAssigner::new();
        assert!(engine.replace_task(Task::new("T1", 1.0)).is_none());
        let old = engine.replace_task(Task::new("T1", 2.0)).unwrap();
        assert!((old.estimated_hours - 1.0).abs() < 1e-10);
        assert_eq!(engine.tasks().len(), 1);
        assert!((engine.task("T1").unwrap().estimated_hours - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_roster_summary() {
        let mut engine = TaskAssigner::new();
        engine.add_task(Task::new("T1", 1.0));
        assert!(engine.assign().unwrap().is_empty());
        let s = engine.summary();
        assert_eq!(s.total_tasks, 1);
        assert_eq!(s.unassigned_tasks, 1);
        assert_eq!(s.unassigned_task_ids, vec!["T1"]);
    }

    #[test]
    fn test_strict_config() {
        let mut engine = TaskAssigner::with_config(&AssignConfig::new().with_strict(true));
        engine.add_employee(Employee::new("E1", ExperienceLevel::Mid).with_availability(8.0));
        engine.add_employee(Employee::new("E1", ExperienceLevel::Mid).with_availability(8.0));
        engine.add_task(Task::new("T1", 1.0));
        assert!(matches!(engine.assign(), Err(AssignError::Validation(_))));
    }

    #[test]
    fn test_document_round_trip_and_export() {
        let mut engine = scenario();
        let doc = engine.to_document();

        let mut other = TaskAssigner::new();
        other.add_task(Task::new("stale", 1.0));
        let json = doc.to_json_string().unwrap();
        other.load_document(ProjectDocument::from_json_str(&json).unwrap());
        assert_eq!(other.tasks().len(), 1);
        assert!(other.task("stale").is_none());
        assert!(other.assignments().is_empty());

        engine.assign().unwrap();
        let export = engine.export();
        assert_eq!(export.assignments.len(), 1);
        assert_eq!(export.summary.assigned_tasks, 1);

        let json = export.to_json_string().unwrap();
        let back = AssignmentExport::from_json_str(&json).unwrap();
        assert_eq!(back, export);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assignments.json");
        export.save(&path).unwrap();
        assert_eq!(AssignmentExport::load(&path).unwrap(), export);
    }

    #[test]
    fn test_clear() {
        let mut engine = scenario();
        engine.assign().unwrap();
        engine.clear();
        assert!(engine.employees().is_empty());
        assert!(engine.tasks().is_empty());
        assert!(engine.assignments().is_empty());
    }
}
