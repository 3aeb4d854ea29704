//! Swarmlab
//!
//! Building blocks for population-based optimization: bounded numeric
//! vectors and domains, control parameters, entities, topologies,
//! selection and variation operators, decomposed multi-objective benchmark
//! problems, cluster validity indices and algorithm measurements.
//!
//! # Modules
//!
//! - [`types`]: bounds, numeric vectors and textual domains
//! - [`random`]: probability distributions and control parameters
//! - [`entity`]: individuals, particles and fitness
//! - [`topology`]: global-best and ring topologies
//! - [`selection`]: random, elitist and tournament selection
//! - [`operators`]: uniform crossover and Gaussian mutation
//! - [`problem`]: function problems, multi-objective problems, WFG4/WFG8
//! - [`clustering`]: centroids, distance measures and the Dunn index
//! - [`measurement`]: measurements over algorithm snapshots
//! - [`algorithm`]: reference GA and PSO drivers

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod clustering;
pub mod config;
pub mod entity;
pub mod error;
pub mod measurement;
pub mod operators;
pub mod problem;
pub mod random;
pub mod selection;
pub mod topology;
pub mod types;

// Re-export main types for convenience
pub use algorithm::{GeneticAlgorithm, OptimizationResult, Pso};
pub use clustering::{CentroidHolder, ClusterCentroid, DistanceMeasure, DunnIndex, ValidityIndex};
pub use config::{GaSettings, PsoSettings, SolverConfig};
pub use entity::{Entity, Fitness, Individual, Particle};
pub use error::{SwarmError, SwarmResult};
pub use measurement::{AlgorithmSnapshot, ClusteringSnapshot, Measurement};
pub use operators::{CrossoverStrategy, MutationStrategy, UniformCrossover};
pub use problem::{FunctionProblem, MultiObjectiveProblem, Problem};
pub use random::{ControlParameter, ProbabilityDistribution, RandomControlParameter};
pub use selection::SelectionStrategy;
pub use topology::{GBestTopology, LBestTopology, Topology};
pub use types::{Bounds, Domain, Numeric, Vector};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

/// Initialize the library
pub fn init() {
    tracing::info!(version = VERSION, "Swarmlab initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
