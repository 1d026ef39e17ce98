//! Employee model.
//!
//! Employees are the people tasks get assigned to. Each employee has a
//! set of skill tags, an experience level, and a weekly capacity in hours.
//! `current_workload` is the hours committed by the latest assignment run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ExperienceLevel;

/// A person who can be assigned tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Skill tags (e.g., "python", "react").
    #[serde(default)]
    pub skills: BTreeSet<String>,
    /// Seniority, compared against task complexity.
    pub experience_level: ExperienceLevel,
    /// Weekly capacity (hours).
    pub availability_hours: f64,
    /// Hours committed by the last assignment run.
    #[serde(default)]
    pub current_workload: f64,
}

impl Employee {
    /// Creates an employee with no skills and zero capacity.
    pub fn new(id: impl Into<String>, experience_level: ExperienceLevel) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            skills: BTreeSet::new(),
            experience_level,
            availability_hours: 0.0,
            current_workload: 0.0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a skill tag.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.insert(skill.into());
        self
    }

    /// Adds several skill tags.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills.extend(skills.into_iter().map(Into::into));
        self
    }

    /// Sets the weekly capacity (hours).
    pub fn with_availability(mut self, hours: f64) -> Self {
        self.availability_hours = hours;
        self
    }

    /// Whether this employee has a given skill tag.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    /// Capacity left after the committed workload (may be negative).
    pub fn remaining_hours(&self) -> f64 {
        self.availability_hours - self.current_workload
    }

    /// Committed workload as a percentage of capacity.
    ///
    /// Returns 0 when the employee has no capacity.
    pub fn utilization_percentage(&self) -> f64 {
        utilization_percentage(self.current_workload, self.availability_hours)
    }
}

/// `workload / availability * 100`, or 0 when availability is not positive.
pub(crate) fn utilization_percentage(workload: f64, availability: f64) -> f64 {
    if availability > 0.0 {
        workload / availability * 100.0
    } else {
        0.0
    }
}
