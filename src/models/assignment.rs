//! Assignment model.
//!
//! An assignment commits one task to one employee for the task's
//! estimated effort. Assignment runs produce a fresh list each time.

use serde::{Deserialize, Serialize};

/// A task-employee pairing produced by an assignment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned task ID.
    pub task_id: String,
    /// Assignee ID.
    pub employee_id: String,
    /// Hours committed (the task's estimated effort).
    pub assigned_hours: f64,
    /// Optional scheduling window start. Never set by the greedy run.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Optional scheduling window end. Never set by the greedy run.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Assignment {
    /// Creates an assignment without a scheduling window.
    pub fn new(
        task_id: impl Into<String>,
        employee_id: impl Into<String>,
        assigned_hours: f64,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            employee_id: employee_id.into(),
            assigned_hours,
            start_date: None,
            end_date: None,
        }
    }

    /// Sets the scheduling window.
    pub fn with_window(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Whether a scheduling window is set.
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_new() {
        let a = Assignment::new("task1", "emp1", 16.0);
        assert_eq!(a.task_id, "task1");
        assert_eq!(a.employee_id, "emp1");
        assert!((a.assigned_hours - 16.0).abs() < 1e-10);
        assert!(!a.is_scheduled());
    }

    #[test]
    fn test_assignment_window() {
        let a = Assignment::new("task1", "emp1", 4.0).with_window("2024-03-04", "2024-03-05");
        assert!(a.is_scheduled());
        assert_eq!(a.start_date.as_deref(), Some("2024-03-04"));
    }

    #[test]
    fn test_assignment_wire_shape() {
        let a = Assignment::new("task1", "emp1", 16.0);
        let value = serde_json::to_value(&a).unwrap();
        assert_eq!(value["task_id"], "task1");
        assert_eq!(value["employee_id"], "emp1");
        assert_eq!(value["assigned_hours"], 16.0);
        assert!(value["start_date"].is_null());

        let back: Assignment =
            serde_json::from_str(r#"{"task_id":"t","employee_id":"e","assigned_hours":2.5}"#)
                .unwrap();
        assert!(back.start_date.is_none());
    }
}
