//! Weighted scorer.
//!
//! Combines matching criteria into a composite score. The standard
//! scorer weights skill 0.4, experience 0.3, availability 0.3.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::criteria::{AvailabilityMatch, ExperienceMatch, SkillMatch};
use super::{MatchContext, MatchCriterion, MatchScore};
use crate::models::{Employee, Task};

/// Weights of the three built-in criteria.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub skill: f64,
    pub experience: f64,
    pub availability: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skill: 0.4,
            experience: 0.3,
            availability: 0.3,
        }
    }
}

impl ScoreWeights {
    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.skill + self.experience + self.availability
    }
}

#[derive(Clone)]
struct WeightedCriterion {
    criterion: Arc<dyn MatchCriterion>,
    weight: f64,
}

/// One criterion's contribution to a composite score.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionScore {
    /// Criterion name.
    pub name: &'static str,
    /// Raw criterion score.
    pub score: MatchScore,
    /// Weight applied to the raw score.
    pub weight: f64,
}

impl CriterionScore {
    /// Weighted contribution.
    #[inline]
    pub fn weighted(&self) -> f64 {
        self.score * self.weight
    }
}

/// A composable weighted scorer.
///
/// # Example
/// ```
/// use u_assign::scoring::{criteria, Scorer};
///
/// let scorer = Scorer::new()
///     .with_criterion(criteria::SkillMatch, 0.5)
///     .with_criterion(criteria::AvailabilityMatch, 0.5);
/// assert_eq!(scorer.criterion_count(), 2);
/// ```
#[derive(Clone)]
pub struct Scorer {
    criteria: Vec<WeightedCriterion>,
}

impl Scorer {
    /// Creates a scorer with no criteria.
    pub fn new() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    /// Skill / experience / availability at 0.4 / 0.3 / 0.3.
    pub fn standard() -> Self {
        Self::from_weights(ScoreWeights::default())
    }

    /// The three built-in criteria with custom weights.
    pub fn from_weights(weights: ScoreWeights) -> Self {
        Self::new()
            .with_criterion(SkillMatch, weights.skill)
            .with_criterion(ExperienceMatch, weights.experience)
            .with_criterion(AvailabilityMatch, weights.availability)
    }

    /// Adds a weighted criterion.
    pub fn with_criterion<C>(mut self, criterion: C, weight: f64) -> Self
    where
        C: MatchCriterion + 'static,
    {
        self.criteria.push(WeightedCriterion {
            criterion: Arc::new(criterion),
            weight,
        });
        self
    }

    /// Composite score: weighted sum of all criteria.
    pub fn score(&self, task: &Task, employee: &Employee, context: &MatchContext) -> f64 {
        self.criteria
            .iter()
            .map(|wc| wc.criterion.evaluate(task, employee, context) * wc.weight)
            .sum()
    }

    /// Raw score and weight of each criterion, in insertion order.
    pub fn breakdown(
        &self,
        task: &Task,
        employee: &Employee,
        context: &MatchContext,
    ) -> Vec<CriterionScore> {
        self.criteria
            .iter()
            .map(|wc| CriterionScore {
                name: wc.criterion.name(),
                score: wc.criterion.evaluate(task, employee, context),
                weight: wc.weight,
            })
            .collect()
    }

    /// Number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for Scorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scorer")
            .field(
                "criteria",
                &self
                    .criteria
                    .iter()
                    .map(|c| format!("{}(w={})", c.criterion.name(), c.weight))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
