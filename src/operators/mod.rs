//! Variation operators: crossover and mutation

pub mod crossover;
pub mod mutation;

pub use crossover::{CrossoverStrategy, UniformCrossover};
pub use mutation::{GaussianMutation, MutationStrategy};
