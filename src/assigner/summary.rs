//! Assignment run reporting.
//!
//! Summarizes a run for persistence and display.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned | Number of assignments |
//! | Unassigned | Total tasks − assigned |
//! | Utilization | committed / availability × 100 (0 when availability is 0) |
//! | Avg Utilization | Mean utilization over the roster |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{utilization_percentage, Assignment, Employee, Task};

/// Workload line for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWorkload {
    pub employee_id: String,
    pub employee_name: String,
    /// Committed hours.
    pub current_workload: f64,
    /// Capacity (hours).
    pub availability: f64,
    /// `current_workload / availability * 100`, 0 when availability is 0.
    pub utilization_percentage: f64,
}

impl EmployeeWorkload {
    /// Workload line from an employee's current state.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            current_workload: employee.current_workload,
            availability: employee.availability_hours,
            utilization_percentage: utilization_percentage(
                employee.current_workload,
                employee.availability_hours,
            ),
        }
    }

    /// Whether committed hours exceed capacity.
    pub fn is_overcommitted(&self) -> bool {
        self.current_workload > self.availability
    }
}

/// Summary of the latest assignment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSummary {
    pub total_tasks: usize,
    pub total_employees: usize,
    pub assigned_tasks: usize,
    /// `total_tasks - assigned_tasks`.
    pub unassigned_tasks: usize,
    /// Backlog entries not covered by an assignment, in backlog order.
    #[serde(default)]
    pub unassigned_task_ids: Vec<String>,
    pub assignments: Vec<Assignment>,
    pub employee_workloads: Vec<EmployeeWorkload>,
}

impl AssignmentSummary {
    /// Builds a summary from a roster (with workloads applied), a backlog,
    /// and the run's assignments.
    ///
    /// Each assignment covers one backlog entry with its task id, the
    /// earliest not yet covered. Entries sharing an id beyond the number of
    /// assignments for it are reported unassigned.
    pub fn calculate(employees: &[Employee], tasks: &[Task], assignments: &[Assignment]) -> Self {
        let mut pending: HashMap<&str, usize> = HashMap::new();
        for a in assignments {
            *pending.entry(a.task_id.as_str()).or_insert(0) += 1;
        }
        let unassigned_task_ids = tasks
            .iter()
            .filter(|t| match pending.get_mut(t.id.as_str()) {
                Some(n) if *n > 0 => {
                    *n -= 1;
                    false
                }
                _ => true,
            })
            .map(|t| t.id.clone())
            .collect();

        Self {
            total_tasks: tasks.len(),
            total_employees: employees.len(),
            assigned_tasks: assignments.len(),
            unassigned_tasks: tasks.len().saturating_sub(assignments.len()),
            unassigned_task_ids,
            assignments: assignments.to_vec(),
            employee_workloads: employees.iter().map(EmployeeWorkload::from_employee).collect(),
        }
    }

    /// Workload line for an employee.
    pub fn workload_for(&self, employee_id: &str) -> Option<&EmployeeWorkload> {
        self.employee_workloads
            .iter()
            .find(|w| w.employee_id == employee_id)
    }

    /// Mean utilization percentage over the roster (0 for an empty roster).
    pub fn average_utilization(&self) -> f64 {
        if self.employee_workloads.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .employee_workloads
            .iter()
            .map(|w| w.utilization_percentage)
            .sum();
        sum / self.employee_workloads.len() as f64
    }

    /// Hours committed across all assignments.
    pub fn total_assigned_hours(&self) -> f64 {
        self.assignments.iter().map(|a| a.assigned_hours).sum()
    }

    /// Whether every task was assigned.
    pub fn is_complete(&self) -> bool {
        self.unassigned_tasks == 0
    }
}
