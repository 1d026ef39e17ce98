//! Ordinal levels: experience, task complexity, task priority.
//!
//! Each level maps to a rank in `1..=4`. Experience and complexity ranks
//! are compared directly when scoring experience fit; priority ranks
//! order the backlog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AssignError;

/// Employee seniority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    #[default]
    Mid,
    Senior,
    Expert,
}

/// Task difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Moderate,
    Complex,
    Expert,
}

/// Task urgency (`Critical` is scheduled first).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl ExperienceLevel {
    /// All levels, lowest first.
    pub const ALL: [Self; 4] = [Self::Junior, Self::Mid, Self::Senior, Self::Expert];

    /// Ordinal rank (junior = 1, expert = 4).
    pub fn rank(self) -> u8 {
        match self {
            Self::Junior => 1,
            Self::Mid => 2,
            Self::Senior => 3,
            Self::Expert => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Expert => "expert",
        }
    }
}

impl Complexity {
    /// All levels, lowest first.
    pub const ALL: [Self; 4] = [Self::Simple, Self::Moderate, Self::Complex, Self::Expert];

    /// Ordinal rank (simple = 1, expert = 4).
    pub fn rank(self) -> u8 {
        match self {
            Self::Simple => 1,
            Self::Moderate => 2,
            Self::Complex => 3,
            Self::Expert => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
            Self::Expert => "expert",
        }
    }
}

impl Priority {
    /// All levels, lowest first.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Ordinal rank (low = 1, critical = 4).
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

fn parse_level<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    name: fn(T) -> &'static str,
) -> Result<T, AssignError> {
    let needle = value.trim().to_ascii_lowercase();
    all.iter()
        .copied()
        .find(|&level| name(level) == needle)
        .ok_or_else(|| AssignError::UnknownLevel {
            kind,
            value: value.to_string(),
        })
}

impl FromStr for ExperienceLevel {
    type Err = AssignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level("experience", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for Complexity {
    type Err = AssignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level("complexity", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for Priority {
    type Err = AssignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level("priority", s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
