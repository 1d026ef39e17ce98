//! Built-in matching criteria.
//!
//! - **Skill**: share of required skill tags the employee holds
//! - **Experience**: fit between seniority and task complexity
//! - **Availability**: remaining capacity relative to task effort
//!
//! All criteria return scores in `0.0..=1.0`, higher is better.

use super::{MatchContext, MatchCriterion, MatchScore};
use crate::models::{Employee, Task};

/// Score when seniority exceeds task complexity.
pub const OVERQUALIFIED_SCORE: f64 = 0.8;
/// Penalty per rank the employee falls short of the task complexity.
pub const UNDERQUALIFIED_PENALTY: f64 = 0.3;
/// Floor for underqualified employees.
pub const MIN_EXPERIENCE_SCORE: f64 = 0.1;

/// Skill overlap.
///
/// `|required ∩ skills| / |required|`, or 1.0 when the task requires
/// no skills.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillMatch;

impl MatchCriterion for SkillMatch {
    fn name(&self) -> &'static str {
        "skill"
    }

    fn evaluate(&self, task: &Task, employee: &Employee, _context: &MatchContext) -> MatchScore {
        if task.required_skills.is_empty() {
            return 1.0;
        }
        let matched = task
            .required_skills
            .iter()
            .filter(|s| employee.has_skill(s))
            .count();
        matched as f64 / task.required_skills.len() as f64
    }

    fn description(&self) -> &'static str {
        "Fraction of required skills held"
    }
}

/// Experience fit.
///
/// Equal ranks score 1.0, an overqualified employee scores
/// [`OVERQUALIFIED_SCORE`], and each missing rank costs
/// [`UNDERQUALIFIED_PENALTY`] down to [`MIN_EXPERIENCE_SCORE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExperienceMatch;

impl MatchCriterion for ExperienceMatch {
    fn name(&self) -> &'static str {
        "experience"
    }

    fn evaluate(&self, task: &Task, employee: &Employee, _context: &MatchContext) -> MatchScore {
        let employee_rank = employee.experience_level.rank();
        let task_rank = task.complexity.rank();

        if employee_rank == task_rank {
            1.0
        } else if employee_rank > task_rank {
            OVERQUALIFIED_SCORE
        } else {
            let gap = f64::from(task_rank - employee_rank);
            (1.0 - UNDERQUALIFIED_PENALTY * gap).max(MIN_EXPERIENCE_SCORE)
        }
    }

    fn description(&self) -> &'static str {
        "Seniority versus task complexity"
    }
}

/// Availability.
///
/// `min(1.0, remaining / estimated_hours)`, or 0.0 when nothing remains.
/// Not a hard gate: an employee with less time left than the task needs
/// still scores proportionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityMatch;

impl MatchCriterion for AvailabilityMatch {
    fn name(&self) -> &'static str {
        "availability"
    }

    fn evaluate(&self, task: &Task, employee: &Employee, context: &MatchContext) -> MatchScore {
        let remaining = context.remaining(employee.availability_hours);
        if remaining <= 0.0 {
            return 0.0;
        }
        (remaining / task.estimated_hours).min(1.0)
    }

    fn description(&self) -> &'static str {
        "Remaining capacity versus task effort"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Complexity, ExperienceLevel};
    use rstest::rstest;

    fn employee(level: ExperienceLevel, skills: &[&str], availability: f64) -> Employee {
        Employee::new("E", level)
            .with_skills(skills.iter().copied())
            .with_availability(availability)
    }

    #[test]
    fn test_skill_full_partial_none() {
        let task = Task::new("T", 8.0).with_required_skills(["python", "django"]);
        let ctx = MatchContext::idle();

        let full = employee(ExperienceLevel::Mid, &["python", "django", "sql"], 40.0);
        let half = employee(ExperienceLevel::Mid, &["python"], 40.0);
        let none = employee(ExperienceLevel::Mid, &["react"], 40.0);

        assert!((SkillMatch.evaluate(&task, &full, &ctx) - 1.0).abs() < 1e-10);
        assert!((SkillMatch.evaluate(&task, &half, &ctx) - 0.5).abs() < 1e-10);
        assert!((SkillMatch.evaluate(&task, &none, &ctx) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_skill_no_requirements() {
        let task = Task::new("T", 8.0);
        let e = employee(ExperienceLevel::Junior, &[], 40.0);
        assert!((SkillMatch.evaluate(&task, &e, &MatchContext::idle()) - 1.0).abs() < 1e-10);
    }

    #[rstest]
    #[case(ExperienceLevel::Mid, Complexity::Moderate, 1.0)]
    #[case(ExperienceLevel::Expert, Complexity::Expert, 1.0)]
    #[case(ExperienceLevel::Senior, Complexity::Moderate, 0.8)]
    #[case(ExperienceLevel::Expert, Complexity::Simple, 0.8)]
    #[case(ExperienceLevel::Mid, Complexity::Complex, 0.7)]
    #[case(ExperienceLevel::Junior, Complexity::Complex, 0.4)]
    #[case(ExperienceLevel::Junior, Complexity::Expert, 0.1)]
    fn test_experience_fit(
        #[case] level: ExperienceLevel,
        #[case] complexity: Complexity,
        #[case] expected: f64,
    ) {
        let task = Task::new("T", 8.0).with_complexity(complexity);
        let e = employee(level, &[], 40.0);
        let score = ExperienceMatch.evaluate(&task, &e, &MatchContext::idle());
        assert!((score - expected).abs() < 1e-10, "{level} vs {complexity}: {score}");
    }

    #[rstest]
    #[case(20.0, 0.0, 10.0, 1.0)]
    #[case(5.0, 0.0, 10.0, 0.5)]
    #[case(20.0, 15.0, 10.0, 0.5)]
    #[case(20.0, 20.0, 10.0, 0.0)]
    #[case(20.0, 25.0, 10.0, 0.0)]
    fn test_availability(
        #[case] availability: f64,
        #[case] committed: f64,
        #[case] estimated: f64,
        #[case] expected: f64,
    ) {
        let task = Task::new("T", estimated);
        let e = employee(ExperienceLevel::Mid, &[], availability);
        let score = AvailabilityMatch.evaluate(&task, &e, &MatchContext::with_committed(committed));
        assert!((score - expected).abs() < 1e-10);
    }

    #[test]
    fn test_availability_reads_context_not_record() {
        let task = Task::new("T", 10.0);
        let mut e = employee(ExperienceLevel::Mid, &[], 20.0);
        e.current_workload = 20.0; // stale value from a previous run
        let score = AvailabilityMatch.evaluate(&task, &e, &MatchContext::idle());
        assert!((score - 1.0).abs() < 1e-10);
    }
}
