use std::fmt;
use std::sync::Arc;

use super::Problem;
use crate::entity::Fitness;
use crate::error::SwarmResult;
use crate::types::{Domain, Vector};

/// Objective function signature
pub type ObjectiveFn = dyn Fn(&[f64]) -> SwarmResult<f64> + Send + Sync;

/// A single-objective problem defined by a closure over a domain.
#[derive(Clone)]
pub struct FunctionProblem {
    domain: Domain,
    function: Arc<ObjectiveFn>,
}

impl FunctionProblem {
    pub fn new<F>(domain: Domain, function: F) -> Self
    where
        F: Fn(&[f64]) -> SwarmResult<f64> + Send + Sync + 'static,
    {
        Self {
            domain,
            function: Arc::new(function),
        }
    }

    /// Build from a textual domain such as `"R(0, 2), R(0, 4)"`.
    pub fn from_domain_str<F>(domain: &str, function: F) -> SwarmResult<Self>
    where
        F: Fn(&[f64]) -> SwarmResult<f64> + Send + Sync + 'static,
    {
        Ok(Self::new(Domain::parse(domain)?, function))
    }

    /// Validate against the domain, then apply the function.
    pub fn evaluate(&self, candidate: &Vector) -> SwarmResult<f64> {
        self.domain.validate(candidate)?;
        (self.function)(&candidate.values())
    }
}

impl Problem for FunctionProblem {
    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn fitness(&self, candidate: &Vector) -> SwarmResult<Fitness> {
        self.evaluate(candidate).map(Fitness::Single)
    }
}

impl fmt::Debug for FunctionProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionProblem")
            .field("domain", &self.domain.to_string())
            .finish_non_exhaustive()
    }
}
