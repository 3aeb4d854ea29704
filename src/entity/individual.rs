use serde::{Deserialize, Serialize};

use super::{Entity, Fitness};
use crate::types::Vector;

/// Plain candidate solution used by evolutionary algorithms
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    contents: Vector,
    fitness: Fitness,
    dirty: bool,
}

impl Individual {
    /// New individuals are unevaluated.
    pub fn new(contents: Vector) -> Self {
        Self {
            contents,
            fitness: Fitness::Inferior,
            dirty: true,
        }
    }

    pub fn with_fitness(contents: Vector, fitness: Fitness) -> Self {
        Self {
            contents,
            fitness,
            dirty: false,
        }
    }
}

impl Entity for Individual {
    fn contents(&self) -> &Vector {
        &self.contents
    }

    fn contents_mut(&mut self) -> &mut Vector {
        &mut self.contents
    }

    fn fitness(&self) -> &Fitness {
        &self.fitness
    }

    fn set_fitness(&mut self, fitness: Fitness) {
        self.fitness = fitness;
        self.dirty = false;
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
