use serde::{Deserialize, Serialize};

use super::{Entity, Fitness};
use crate::types::Vector;

/// PSO particle: position, velocity and personal best
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    position: Vector,
    velocity: Vec<f64>,
    fitness: Fitness,
    personal_best: Vector,
    personal_best_fitness: Fitness,
    dirty: bool,
}

impl Particle {
    pub fn new(position: Vector) -> Self {
        let velocity = vec![0.0; position.dimension()];
        Self {
            personal_best: position.clone(),
            position,
            velocity,
            fitness: Fitness::Inferior,
            personal_best_fitness: Fitness::Inferior,
            dirty: true,
        }
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec<f64>) {
        self.velocity = velocity;
    }

    pub fn personal_best(&self) -> &Vector {
        &self.personal_best
    }

    pub fn personal_best_fitness(&self) -> &Fitness {
        &self.personal_best_fitness
    }
}

impl Entity for Particle {
    fn contents(&self) -> &Vector {
        &self.position
    }

    fn contents_mut(&mut self) -> &mut Vector {
        &mut self.position
    }

    fn fitness(&self) -> &Fitness {
        &self.fitness
    }

    /// Also moves the personal best when the new fitness improves on it.
    fn set_fitness(&mut self, fitness: Fitness) {
        if fitness.is_better_than(&self.personal_best_fitness) {
            self.personal_best = self.position.clone();
            self.personal_best_fitness = fitness.clone();
        }
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
