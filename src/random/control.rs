//! Control parameters
//!
//! Operators read their magnitudes (crossover probability, mutation rate,
//! step sizes) from a [`ControlParameter`] rather than a plain `f64`, so the
//! same operator can run with a fixed value or with a freshly drawn one on
//! every call.

use std::fmt;
use std::sync::Arc;

use rand::RngCore;

use super::distribution::{ProbabilityDistribution, UniformDistribution};
use crate::error::{SwarmError, SwarmResult};

/// Scalar value source for operator parameters
pub trait ControlParameter: Send + Sync + fmt::Debug {
    /// Current value. Random parameters draw a new value on every call.
    fn parameter(&self, rng: &mut dyn RngCore) -> f64;
}

/// Always yields the same value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantControlParameter {
    value: f64,
}

impl ConstantControlParameter {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl ControlParameter for ConstantControlParameter {
    fn parameter(&self, _rng: &mut dyn RngCore) -> f64 {
        self.value
    }
}

/// Draws from a (possibly shared) distribution over a default range
///
/// Cloning does not copy the distribution: a clone starts over with the
/// default uniform distribution and the default `[0, 1]` range.
#[derive(Debug)]
pub struct RandomControlParameter {
    distribution: Arc<dyn ProbabilityDistribution>,
    lower_bound: f64,
    upper_bound: f64,
}

impl RandomControlParameter {
    pub fn new() -> Self {
        Self::with_distribution(Arc::new(UniformDistribution))
    }

    pub fn with_distribution(distribution: Arc<dyn ProbabilityDistribution>) -> Self {
        Self {
            distribution,
            lower_bound: 0.0,
            upper_bound: 1.0,
        }
    }

    /// Draw over the default range.
    pub fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        self.distribution.sample(rng, self.lower_bound, self.upper_bound)
    }

    /// Draw over `[min, max]` for this call only.
    pub fn sample_in(&self, rng: &mut dyn RngCore, min: f64, max: f64) -> SwarmResult<f64> {
        self.distribution.sample_with(rng, &[min, max])
    }

    /// Draw with an explicit parameter list for distributions whose
    /// parameters are not a range.
    pub fn sample_with(&self, rng: &mut dyn RngCore, params: &[f64]) -> SwarmResult<f64> {
        self.distribution.sample_with(rng, params)
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> SwarmResult<()> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(SwarmError::InvalidArgument(format!(
                "invalid control parameter range [{}, {}]",
                lower, upper
            )));
        }
        self.lower_bound = lower;
        self.upper_bound = upper;
        Ok(())
    }

    pub fn distribution(&self) -> &Arc<dyn ProbabilityDistribution> {
        &self.distribution
    }

    pub fn set_distribution(&mut self, distribution: Arc<dyn ProbabilityDistribution>) {
        self.distribution = distribution;
    }
}

impl Default for RandomControlParameter {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RandomControlParameter {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl ControlParameter for RandomControlParameter {
    fn parameter(&self, rng: &mut dyn RngCore) -> f64 {
        self.sample(rng)
    }
}
