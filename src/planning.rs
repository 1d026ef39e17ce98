//! Backlog construction from planner output.
//!
//! An external planner produces either an ordered list of step
//! descriptions or a milestone plan. This module turns both into [`Task`]s.
//!
//! - Steps: skill tags and effort are inferred from keywords in the step
//!   text, priority and complexity come from [`StepDefaults`].
//! - Milestones: priority, complexity, skills, and standard duration follow
//!   the [`MilestoneType`]; dependencies are carried over.

use serde::{Deserialize, Serialize};

use crate::models::{Complexity, Priority, Task};

/// Titles longer than this are truncated with `...`.
pub const MAX_TITLE_CHARS: usize = 50;

/// Effort when no keyword bucket matches (hours).
pub const DEFAULT_ESTIMATE_HOURS: f64 = 8.0;

/// Working hours per milestone day.
pub const HOURS_PER_DAY: f64 = 8.0;

const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("python", &["python", "django", "flask", "pandas", "numpy", "scikit-learn"]),
    ("javascript", &["javascript", "js", "react", "vue", "angular", "node.js", "express"]),
    ("java", &["java", "spring", "maven", "gradle"]),
    ("c++", &["c++", "cpp", "c plus plus"]),
    ("c#", &["c#", "csharp", ".net", "asp.net"]),
    ("database", &["database", "sql", "mysql", "postgresql", "mongodb", "redis"]),
    ("frontend", &["frontend", "ui", "ux", "html", "css", "design"]),
    ("backend", &["backend", "api", "rest", "graphql", "server"]),
    ("devops", &["devops", "docker", "kubernetes", "aws", "azure", "ci/cd"]),
    ("testing", &["testing", "test", "unit test", "integration test", "qa"]),
    ("documentation", &["documentation", "docs", "write", "document"]),
    ("project_management", &["project", "management", "planning", "coordination"]),
];

const FALLBACK_SKILLS: &[(&str, &[&str])] = &[
    ("programming", &["code", "develop", "program", "implement"]),
    ("design", &["design", "create", "build"]),
    ("testing", &["test", "verify", "validate"]),
    ("documentation", &["write", "document", "explain"]),
];

const ESTIMATE_BUCKETS: &[(f64, &[&str])] = &[
    (2.0, &["simple", "basic", "quick", "minor"]),
    (16.0, &["complex", "advanced", "major", "comprehensive"]),
    (8.0, &["research", "investigation", "analysis"]),
    (12.0, &["design", "architecture", "planning"]),
    (6.0, &["testing", "validation", "qa"]),
    (4.0, &["documentation", "writing", "manual"]),
];

/// One planner step.
///
/// Accepts `{"task": "..."}` or `{"description": "..."}`; `task` wins
/// when both are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlanStep {
    /// A step with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            task: Some(text.into()),
            description: None,
        }
    }

    /// Step text, if any non-empty field is present.
    pub fn text(&self) -> Option<&str> {
        self.task
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.description.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Priority and complexity for converted tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepDefaults {
    pub priority: Priority,
    pub complexity: Complexity,
}

/// Converts planner steps into tasks `task_001`, `task_002`, ...
///
/// Steps without text are named `Step N`. Converted tasks have no
/// dependencies.
pub fn tasks_from_steps(steps: &[PlanStep], defaults: &StepDefaults) -> Vec<Task> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let fallback;
            let text = match step.text() {
                Some(text) => text,
                None => {
                    fallback = format!("Step {}", i + 1);
                    fallback.as_str()
                }
            };
            task_from_text(i + 1, text, defaults)
        })
        .collect()
}

/// Converts plain step descriptions into tasks.
pub fn tasks_from_descriptions<S: AsRef<str>>(steps: &[S], defaults: &StepDefaults) -> Vec<Task> {
    steps
        .iter()
        .enumerate()
        .map(|(i, text)| task_from_text(i + 1, text.as_ref(), defaults))
        .collect()
}

fn task_from_text(number: usize, text: &str, defaults: &StepDefaults) -> Task {
    Task::new(format!("task_{number:03}"), estimate_hours(text))
        .with_title(truncate_title(text))
        .with_description(text)
        .with_required_skills(infer_skills(text))
        .with_priority(defaults.priority)
        .with_complexity(defaults.complexity)
}

/// Skill tags suggested by keywords in `text`.
///
/// Falls back to generic tags (programming, design, testing,
/// documentation) when no specific keyword matches.
pub fn infer_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let skills = matching_skills(&lower, SKILL_KEYWORDS);
    if skills.is_empty() {
        matching_skills(&lower, FALLBACK_SKILLS)
    } else {
        skills
    }
}

fn matching_skills(lower: &str, table: &[(&str, &[&str])]) -> Vec<String> {
    table
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

/// Effort estimate (hours) from keywords in `text`.
///
/// The first matching bucket wins; [`DEFAULT_ESTIMATE_HOURS`] otherwise.
pub fn estimate_hours(text: &str) -> f64 {
    let lower = text.to_lowercase();
    ESTIMATE_BUCKETS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|&(hours, _)| hours)
        .unwrap_or(DEFAULT_ESTIMATE_HOURS)
}

fn truncate_title(text: &str) -> String {
    if text.chars().count() > MAX_TITLE_CHARS {
        let head: String = text.chars().take(MAX_TITLE_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Milestone phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneType {
    Planning,
    Development,
    Testing,
    Deployment,
    Launch,
}

impl MilestoneType {
    pub const ALL: [Self; 5] = [
        Self::Planning,
        Self::Development,
        Self::Testing,
        Self::Deployment,
        Self::Launch,
    ];

    /// Priority of the derived task.
    pub fn priority(self) -> Priority {
        match self {
            Self::Planning | Self::Development => Priority::High,
            Self::Testing => Priority::Medium,
            Self::Deployment | Self::Launch => Priority::Critical,
        }
    }

    /// Complexity of the derived task.
    pub fn complexity(self) -> Complexity {
        match self {
            Self::Development => Complexity::Complex,
            Self::Launch => Complexity::Simple,
            Self::Planning | Self::Testing | Self::Deployment => Complexity::Moderate,
        }
    }

    /// Skill tags required by the derived task.
    pub fn skills(self) -> &'static [&'static str] {
        match self {
            Self::Planning => &["project_management", "planning"],
            Self::Development => &["programming", "development"],
            Self::Testing => &["testing", "qa"],
            Self::Deployment => &["devops", "deployment"],
            Self::Launch => &["marketing", "launch"],
        }
    }

    /// Duration used when a milestone does not state one (days).
    pub fn standard_duration_days(self) -> u32 {
        match self {
            Self::Planning => 7,
            Self::Development => 21,
            Self::Testing => 7,
            Self::Deployment => 3,
            Self::Launch => 2,
        }
    }
}

/// One milestone of a project plan.
///
/// Extra plan fields (target dates, deliverables) are ignored on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub milestone_type: MilestoneType,
    /// Planned length in days; the type's standard duration when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    /// Ids of milestones that must finish first.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Milestone {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        milestone_type: MilestoneType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            milestone_type,
            duration_days: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_duration_days(mut self, days: u32) -> Self {
        self.duration_days = Some(days);
        self
    }

    pub fn with_dependency(mut self, milestone_id: impl Into<String>) -> Self {
        self.dependencies.push(milestone_id.into());
        self
    }

    /// Effort in hours. A zero-day milestone counts as one day.
    pub fn estimated_hours(&self) -> f64 {
        let days = self
            .duration_days
            .unwrap_or_else(|| self.milestone_type.standard_duration_days())
            .max(1);
        f64::from(days) * HOURS_PER_DAY
    }
}

/// Task id derived from a milestone id.
pub fn milestone_task_id(milestone_id: &str) -> String {
    format!("task_{milestone_id}")
}

/// Converts plan milestones into tasks `task_{milestone id}`.
///
/// Dependencies are rewritten to the derived task ids, so the backlog
/// orders the same way the plan does.
pub fn tasks_from_milestones(milestones: &[Milestone]) -> Vec<Task> {
    milestones
        .iter()
        .map(|m| {
            let kind = m.milestone_type;
            m.dependencies.iter().fold(
                Task::new(milestone_task_id(&m.id), m.estimated_hours())
                    .with_title(m.title.as_str())
                    .with_description(m.description.as_str())
                    .with_required_skills(kind.skills().iter().copied())
                    .with_priority(kind.priority())
                    .with_complexity(kind.complexity()),
                |task, dep| task.with_dependency(milestone_task_id(dep)),
            )
        })
        .collect()
}
