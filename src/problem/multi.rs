//! Multi-objective problems as collections of sub-problems
//!
//! Each objective is an independent [`FunctionProblem`]. When the objectives
//! are projections of one expensive transform, a shared transform can be
//! attached so the transform runs once per evaluation instead of once per
//! objective. Both paths must produce the same values.

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;

use super::{FunctionProblem, Problem};
use crate::entity::Fitness;
use crate::error::{SwarmError, SwarmResult};
use crate::types::{Domain, Vector};

/// Transform producing every objective at once
pub type SharedTransform = dyn Fn(&[f64]) -> SwarmResult<Vec<f64>> + Send + Sync;

#[derive(Clone, Default)]
pub struct MultiObjectiveProblem {
    domain: Domain,
    objectives: Vec<FunctionProblem>,
    shared: Option<Arc<SharedTransform>>,
}

impl MultiObjectiveProblem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an objective. Every objective must declare the same domain.
    pub fn add(&mut self, objective: FunctionProblem) -> SwarmResult<()> {
        if self.objectives.is_empty() {
            self.domain = objective.domain().clone();
        } else if objective.domain() != &self.domain {
            return Err(SwarmError::InvalidArgument(format!(
                "objective domain '{}' differs from '{}'",
                objective.domain(),
                self.domain
            )));
        }
        self.objectives.push(objective);
        Ok(())
    }

    /// Evaluate all objectives through `transform` in a single call.
    pub fn with_shared_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&[f64]) -> SwarmResult<Vec<f64>> + Send + Sync + 'static,
    {
        self.shared = Some(Arc::new(transform));
        self
    }

    pub fn objectives(&self) -> &[FunctionProblem] {
        &self.objectives
    }

    pub fn objective_count(&self) -> usize {
        self.objectives.len()
    }

    pub fn has_shared_transform(&self) -> bool {
        self.shared.is_some()
    }

    /// Evaluate every sub-problem independently.
    pub fn evaluate_decomposed(&self, candidate: &Vector) -> SwarmResult<Vec<f64>> {
        self.objectives
            .par_iter()
            .map(|objective| objective.evaluate(candidate))
            .collect()
    }

    /// Evaluate all objectives, through the shared transform when present.
    pub fn evaluate(&self, candidate: &Vector) -> SwarmResult<Vec<f64>> {
        let Some(transform) = &self.shared else {
            return self.evaluate_decomposed(candidate);
        };

        self.domain.validate(candidate)?;
        let values = transform(&candidate.values())?;
        if values.len() != self.objectives.len() {
            return Err(SwarmError::Domain(format!(
                "shared transform produced {} values for {} objectives",
                values.len(),
                self.objectives.len()
            )));
        }
        Ok(values)
    }
}

impl Problem for MultiObjectiveProblem {
    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn fitness(&self, candidate: &Vector) -> SwarmResult<Fitness> {
        if self.objectives.is_empty() {
            return Err(SwarmError::InsufficientData(
                "multi-objective problem has no objectives".to_string(),
            ));
        }
        self.evaluate(candidate).map(Fitness::Multi)
    }
}

impl fmt::Debug for MultiObjectiveProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiObjectiveProblem")
            .field("domain", &self.domain.to_string())
            .field("objectives", &self.objectives.len())
            .field("shared_transform", &self.shared.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> MultiObjectiveProblem {
        let mut problem = MultiObjectiveProblem::new();
        problem
            .add(FunctionProblem::from_domain_str("R(0, 1)^2", |x: &[f64]| Ok(x[0])).unwrap())
            .unwrap();
        problem
            .add(
                FunctionProblem::from_domain_str("R(0, 1)^2", |x: &[f64]| Ok(1.0 - x[0] + x[1]))
                    .unwrap(),
            )
            .unwrap();
        problem
    }

    #[test]
    fn test_fitness_is_multi() {
        let problem = pair();
        let f = problem.fitness(&Vector::from_values(&[0.25, 0.5])).unwrap();
        assert_eq!(f, Fitness::Multi(vec![0.25, 1.25]));
    }

    #[test]
    fn test_mismatched_domains_rejected() {
        let mut problem = pair();
        let other = FunctionProblem::from_domain_str("R(0, 2)^2", |x: &[f64]| Ok(x[1])).unwrap();
        assert!(matches!(problem.add(other), Err(SwarmError::InvalidArgument(_))));
    }

    #[test]
    fn test_shared_transform_length_checked() {
        let problem = pair().with_shared_transform(|x: &[f64]| Ok(vec![x[0]]));
        assert!(matches!(
            problem.evaluate(&Vector::from_values(&[0.1, 0.1])),
            Err(SwarmError::Domain(_))
        ));
    }

    #[test]
    fn test_empty_problem() {
        let problem = MultiObjectiveProblem::new();
        assert!(problem.fitness(&Vector::default()).is_err());
    }
}
