//! Backlog ordering.
//!
//! Produces the sequence in which tasks are offered to the roster:
//!
//! 1. A dependency order from depth-first traversal. Visiting a task first
//!    visits its unvisited dependencies, then appends the task. Reaching a
//!    task that is still in progress is a circular dependency.
//! 2. A stable sort by priority, highest first. Ties keep their dependency
//!    order. A high-priority dependent may end up ahead of a lower-priority
//!    dependency; that is accepted.
//!
//! Orders are returned as indices into the input slice.
//!
//! # Complexity
//! O(T + E) for T tasks and E dependency edges, plus O(T log T) for the sort.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::error::{AssignError, Result};
use crate::models::Task;

/// Dependency-respecting order over `tasks`.
///
/// Every dependency precedes its dependents. Dependencies naming tasks
/// outside the backlog are skipped with a warning. When several tasks
/// share an id, only the first is placed.
///
/// The traversal keeps an explicit stack, so chain depth is bounded only
/// by memory.
///
/// # Errors
/// [`AssignError::CircularDependency`] naming the task reached again while
/// still in progress.
pub fn dependency_order(tasks: &[Task]) -> Result<Vec<usize>> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(tasks.len());
    for (i, task) in tasks.iter().enumerate() {
        index.entry(task.id.as_str()).or_insert(i);
    }

    let mut visited: HashSet<usize> = HashSet::with_capacity(tasks.len());
    let mut in_progress: HashSet<usize> = HashSet::new();
    let mut order = Vec::with_capacity(tasks.len());
    // (task index, position of the next dependency to visit)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for task in tasks {
        let Some(&root) = index.get(task.id.as_str()) else {
            continue;
        };
        if visited.contains(&root) {
            continue;
        }
        in_progress.insert(root);
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let idx = frame.0;
            let Some(dep) = tasks[idx].dependencies.get(frame.1) else {
                stack.pop();
                in_progress.remove(&idx);
                visited.insert(idx);
                order.push(idx);
                continue;
            };
            frame.1 += 1;

            let Some(&next) = index.get(dep.as_str()) else {
                warn!(task_id = %dep, "skipping dependency on unknown task");
                continue;
            };
            if in_progress.contains(&next) {
                return Err(AssignError::CircularDependency {
                    task_id: dep.clone(),
                });
            }
            if !visited.contains(&next) {
                in_progress.insert(next);
                stack.push((next, 0));
            }
        }
    }

    Ok(order)
}

/// Dependency order followed by a stable sort on priority (descending).
///
/// This is the order in which an assignment run considers tasks.
pub fn assignment_order(tasks: &[Task]) -> Result<Vec<usize>> {
    let mut order = dependency_order(tasks)?;
    order.sort_by(|&a, &b| tasks[b].priority.cmp(&tasks[a].priority));
    Ok(order)
}
