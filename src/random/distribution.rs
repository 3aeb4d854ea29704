//! Probability distributions
//!
//! Distributions carry no RNG of their own: the caller passes the generator
//! on every draw, so a single distribution instance can be shared between
//! many control parameters while each run keeps its own seeded state.

use std::fmt;

use rand::{Rng, RngCore};
use rand_distr::{Cauchy, Distribution, Normal};

use crate::error::{SwarmError, SwarmResult};

/// A distribution that can be sampled with a caller-supplied parameter list
pub trait ProbabilityDistribution: Send + Sync + fmt::Debug {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Sample using the distribution's two-parameter form (e.g. `[min, max)`
    /// for uniform, mean and standard deviation for Gaussian).
    ///
    /// Parameters are assumed valid; see [`sample_with`](Self::sample_with)
    /// for the checked form.
    fn sample(&self, rng: &mut dyn RngCore, a: f64, b: f64) -> f64;

    /// Checked sampling with an explicit parameter list.
    fn sample_with(&self, rng: &mut dyn RngCore, params: &[f64]) -> SwarmResult<f64>;
}

fn expect_pair(name: &str, params: &[f64]) -> SwarmResult<(f64, f64)> {
    match params {
        [a, b] if a.is_finite() && b.is_finite() => Ok((*a, *b)),
        [_, _] => Err(SwarmError::InvalidArgument(format!(
            "{} distribution parameters must be finite, got {:?}",
            name, params
        ))),
        _ => Err(SwarmError::InvalidArgument(format!(
            "{} distribution requires 2 parameters, got {}",
            name,
            params.len()
        ))),
    }
}

/// Uniform over `[min, max)`
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformDistribution;

impl ProbabilityDistribution for UniformDistribution {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn sample(&self, rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
        min + (max - min) * rng.gen::<f64>()
    }

    fn sample_with(&self, rng: &mut dyn RngCore, params: &[f64]) -> SwarmResult<f64> {
        let (min, max) = expect_pair(self.name(), params)?;
        if min > max {
            return Err(SwarmError::InvalidArgument(format!(
                "uniform lower bound {} exceeds upper bound {}",
                min, max
            )));
        }
        Ok(self.sample(rng, min, max))
    }
}

/// Normal distribution parameterised by mean and standard deviation
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussianDistribution;

impl ProbabilityDistribution for GaussianDistribution {
    fn name(&self) -> &'static str {
        "gaussian"
    }

    /// An invalid deviation yields the mean.
    fn sample(&self, rng: &mut dyn RngCore, mean: f64, deviation: f64) -> f64 {
        Normal::new(mean, deviation).map_or(mean, |normal| normal.sample(rng))
    }

    fn sample_with(&self, rng: &mut dyn RngCore, params: &[f64]) -> SwarmResult<f64> {
        let (mean, deviation) = expect_pair(self.name(), params)?;
        if deviation < 0.0 {
            return Err(SwarmError::InvalidArgument(format!(
                "standard deviation must be non-negative, got {}",
                deviation
            )));
        }
        Ok(self.sample(rng, mean, deviation))
    }
}

/// Cauchy distribution parameterised by location and scale
#[derive(Clone, Copy, Debug, Default)]
pub struct CauchyDistribution;

impl ProbabilityDistribution for CauchyDistribution {
    fn name(&self) -> &'static str {
        "cauchy"
    }

    /// A zero or invalid scale yields the location.
    fn sample(&self, rng: &mut dyn RngCore, location: f64, scale: f64) -> f64 {
        Cauchy::new(location, scale).map_or(location, |cauchy| cauchy.sample(rng))
    }

    fn sample_with(&self, rng: &mut dyn RngCore, params: &[f64]) -> SwarmResult<f64> {
        let (location, scale) = expect_pair(self.name(), params)?;
        if scale < 0.0 {
            return Err(SwarmError::InvalidArgument(format!(
                "scale must be non-negative, got {}",
                scale
            )));
        }
        Ok(self.sample(rng, location, scale))
    }
}
