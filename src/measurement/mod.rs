//! Measurements taken from a running algorithm
//!
//! A measurement reads an algorithm snapshot and produces a single number.
//! Measurements never modify the algorithm they observe.

pub mod bound_violations;
pub mod validity;

pub use bound_violations::DimensionBoundViolationsPerEntity;
pub use validity::ValidityMeasurement;

use crate::clustering::CentroidHolder;
use crate::entity::Entity;
use crate::error::SwarmResult;

/// Read-only view of an algorithm's current state
pub trait AlgorithmSnapshot {
    type Entity: Entity;

    /// Entities of the current population, in topology order.
    fn entities(&self) -> &[Self::Entity];

    /// Best solution found so far.
    fn best_solution(&self) -> Option<&Self::Entity>;
}

/// Snapshot of a clustering algorithm whose best solution is a set of
/// centroids
pub trait ClusteringSnapshot {
    fn best_holder(&self) -> Option<&CentroidHolder>;
}

pub trait Measurement<A: ?Sized> {
    fn value(&self, algorithm: &A) -> SwarmResult<f64>;
}
