//! Input validation for assignment problems.
//!
//! Checks the caller contract of a roster and backlog before assignment.
//! The greedy run does not require these checks; they run only when
//! strict mode is enabled or when called directly. Detects:
//! - Duplicate IDs
//! - Dependencies on unknown tasks
//! - Self-dependencies
//! - Non-positive effort estimates
//! - Negative availability
//! - Circular dependencies (DAG validation)
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::models::{Employee, Task};
use crate::ordering;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees or two tasks share the same ID.
    DuplicateId,
    /// A task depends on an ID that is not in the backlog.
    UnknownDependency,
    /// A task lists itself as a dependency.
    SelfDependency,
    /// Estimated hours are zero, negative, or not finite.
    InvalidEstimate,
    /// Availability is negative or not finite.
    InvalidAvailability,
    /// Dependency graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a roster and backlog.
///
/// Checks:
/// 1. No duplicate employee IDs
/// 2. No duplicate task IDs
/// 3. Availability is finite and non-negative
/// 4. Estimated hours are finite and positive
/// 5. Dependencies name tasks in the backlog
/// 6. No task depends on itself
/// 7. No circular dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(employees: &[Employee], tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut employee_ids = HashSet::new();
    for e in employees {
        if !employee_ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }
        if !e.availability_hours.is_finite() || e.availability_hours < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidAvailability,
                format!(
                    "Employee '{}' has invalid availability {}",
                    e.id, e.availability_hours
                ),
            ));
        }
    }

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
        if !task.estimated_hours.is_finite() || task.estimated_hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidEstimate,
                format!(
                    "Task '{}' has invalid estimated hours {}",
                    task.id, task.estimated_hours
                ),
            ));
        }
    }

    let mut has_self_dependency = false;
    for task in tasks {
        for dep in &task.dependencies {
            if dep == &task.id {
                has_self_dependency = true;
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfDependency,
                    format!("Task '{}' depends on itself", task.id),
                ));
            } else if !task_ids.contains(dep.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDependency,
                    format!("Task '{}' depends on unknown task '{}'", task.id, dep),
                ));
            }
        }
    }

    // A self-dependency is already a one-task cycle; report it once.
    if !has_self_dependency {
        if let Err(err) = ordering::dependency_order(tasks) {
            errors.push(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                err.to_string(),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
