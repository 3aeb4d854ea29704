//! Probability distributions and control parameters

pub mod control;
pub mod distribution;

pub use control::{ConstantControlParameter, ControlParameter, RandomControlParameter};
pub use distribution::{
    CauchyDistribution, GaussianDistribution, ProbabilityDistribution, UniformDistribution,
};
