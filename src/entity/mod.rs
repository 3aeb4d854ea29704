//! Entities: candidate solutions together with their fitness
//!
//! Fitness evaluation is two-phase. Anything that changes an entity's
//! contents marks it dirty; [`Entity::evaluate`] only calls the problem when
//! the entity is dirty, and [`Entity::reevaluate`] always does.

pub mod fitness;
pub mod individual;
pub mod particle;

use std::fmt;

pub use fitness::{dominates, Fitness};
pub use individual::Individual;
pub use particle::Particle;

use crate::error::SwarmResult;
use crate::problem::Problem;
use crate::types::Vector;

/// A candidate solution held by a topology
pub trait Entity: Clone + Send + Sync + fmt::Debug {
    fn contents(&self) -> &Vector;

    /// Direct access to the candidate solution. Callers that change values
    /// through this must call [`mark_dirty`](Self::mark_dirty).
    fn contents_mut(&mut self) -> &mut Vector;

    fn fitness(&self) -> &Fitness;

    /// Store an evaluated fitness and clear the dirty flag.
    fn set_fitness(&mut self, fitness: Fitness);

    fn is_dirty(&self) -> bool;

    fn mark_dirty(&mut self);

    fn set_contents(&mut self, contents: Vector) {
        *self.contents_mut() = contents;
        self.mark_dirty();
    }

    fn evaluate<P: Problem + ?Sized>(&mut self, problem: &P) -> SwarmResult<&Fitness> {
        if self.is_dirty() {
            let fitness = problem.fitness(self.contents())?;
            self.set_fitness(fitness);
        }
        Ok(self.fitness())
    }

    fn reevaluate<P: Problem + ?Sized>(&mut self, problem: &P) -> SwarmResult<&Fitness> {
        self.mark_dirty();
        self.evaluate(problem)
    }
}

/// Index of the best entity among `candidates`; ties keep the earliest.
pub fn best_index<E, I>(entities: &[E], candidates: I) -> Option<usize>
where
    E: Entity,
    I: IntoIterator<Item = usize>,
{
    let mut best: Option<usize> = None;
    for i in candidates {
        let Some(entity) = entities.get(i) else { continue };
        match best {
            Some(b) if !entity.fitness().is_better_than(entities[b].fitness()) => {}
            _ => best = Some(i),
        }
    }
    best
}
