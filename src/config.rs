//! Solver configuration

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{SwarmError, SwarmResult};

/// Configuration shared by all drivers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub population_size: usize,
    pub max_iterations: usize,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_iterations: 100,
            seed: None,
        }
    }
}

impl SolverConfig {
    pub fn from_json(json: &str) -> SwarmResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SwarmError::InvalidArgument(format!("invalid solver config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SwarmResult<()> {
        if self.population_size == 0 {
            return Err(SwarmError::InvalidArgument(
                "population size must be positive".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SwarmError::InvalidArgument(
                "max iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Genetic algorithm settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaSettings {
    pub crossover_probability: f64,
    pub mutation_probability: f64,
    /// Mutation step as a fraction of each gene's bound width
    pub mutation_scale: f64,
    pub tournament_size: usize,
}

impl Default for GaSettings {
    fn default() -> Self {
        Self {
            crossover_probability: 0.8,
            mutation_probability: 0.1,
            mutation_scale: 0.1,
            tournament_size: 2,
        }
    }
}

/// Particle swarm settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsoSettings {
    pub inertia: f64,
    /// Cognitive weight (personal best)
    pub c1: f64,
    /// Social weight (neighbourhood best)
    pub c2: f64,
    /// Ring neighbourhood size; `None` uses a global-best topology.
    pub neighbourhood_size: Option<usize>,
}

impl Default for PsoSettings {
    fn default() -> Self {
        Self {
            inertia: 0.7,
            c1: 1.5,
            c2: 1.5,
            neighbourhood_size: None,
        }
    }
}
