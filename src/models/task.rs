//! Task model.
//!
//! A task is a unit of work in the backlog: the skills it requires, its
//! estimated effort, priority, complexity, and the ids of tasks it
//! depends on. Tasks are not mutated by assignment runs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Complexity, Priority};

/// A backlog item to be assigned.
///
/// `dependencies` must name tasks in the same backlog and must not
/// contain the task's own id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Skill tags an assignee should have.
    #[serde(default)]
    pub required_skills: BTreeSet<String>,
    /// Estimated effort (hours, expected > 0).
    pub estimated_hours: f64,
    /// Urgency.
    pub priority: Priority,
    /// Difficulty.
    pub complexity: Complexity,
    /// Ids of tasks that must come first.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Task {
    /// Creates a medium-priority, moderate task with the given effort.
    pub fn new(id: impl Into<String>, estimated_hours: f64) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            required_skills: BTreeSet::new(),
            estimated_hours,
            priority: Priority::default(),
            complexity: Complexity::default(),
            dependencies: Vec::new(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a required skill tag.
    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.insert(skill.into());
        self
    }

    /// Adds several required skill tags.
    pub fn with_required_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills
            .extend(skills.into_iter().map(Into::into));
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the complexity.
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    /// Adds a dependency on another task.
    pub fn with_dependency(mut self, task_id: impl Into<String>) -> Self {
        self.dependencies.push(task_id.into());
        self
    }

    /// Whether this task depends on `task_id`.
    pub fn depends_on(&self, task_id: &str) -> bool {
        self.dependencies.iter().any(|d| d == task_id)
    }

    /// Whether this task has dependencies.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}
