//! Reference optimization drivers
//!
//! The drivers wire topologies, operators and problems together through the
//! same call contract an external algorithm would use. Both expose their
//! state through [`AlgorithmSnapshot`](crate::measurement::AlgorithmSnapshot).

pub mod ga;
pub mod pso;

pub use ga::GeneticAlgorithm;
pub use pso::Pso;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Fitness};
use crate::error::SwarmResult;
use crate::problem::Problem;
use crate::types::Vector;

/// The result of an optimization run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub best_solution: Vector,
    pub best_fitness: Fitness,
    /// Best fitness seen at the start of each iteration
    pub history: Vec<Fitness>,
}

/// Evaluate every dirty entity in parallel.
fn evaluate_all<E, P>(entities: &mut [E], problem: &P) -> SwarmResult<()>
where
    E: Entity,
    P: Problem + ?Sized,
{
    entities
        .par_iter_mut()
        .map(|e| e.evaluate(problem).map(|_| ()))
        .collect()
}

/// Replace `best` with `candidate` when the candidate is strictly better.
fn update_best<E: Entity>(best: &mut Option<E>, candidate: Option<&E>) {
    let Some(candidate) = candidate else { return };
    let improved = match best {
        Some(current) => candidate.fitness().is_better_than(current.fitness()),
        None => true,
    };
    if improved {
        *best = Some(candidate.clone());
    }
}
