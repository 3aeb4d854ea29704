//! Objective evaluators
//!
//! A [`Problem`] maps a candidate vector to a [`Fitness`]. Single-objective
//! problems wrap a plain function; multi-objective problems are collections
//! of single-objective sub-problems evaluated on the same input.

pub mod function;
pub mod multi;
pub mod wfg;

pub use function::FunctionProblem;
pub use multi::MultiObjectiveProblem;
pub use wfg::{wfg4, wfg4_shared, wfg8, wfg8_shared};

use crate::entity::Fitness;
use crate::error::SwarmResult;
use crate::types::{Domain, Vector};

/// Defines an optimization problem (minimisation).
pub trait Problem: Send + Sync {
    /// Input domain every candidate must satisfy.
    fn domain(&self) -> &Domain;

    /// Evaluate a candidate. Candidates outside the domain fail with a
    /// domain error.
    fn fitness(&self, candidate: &Vector) -> SwarmResult<Fitness>;

    /// Number of variables.
    fn dimension(&self) -> usize {
        self.domain().dimension()
    }
}
