//! Mutation strategies

use std::fmt;

use rand::{Rng, RngCore};

use crate::entity::Entity;
use crate::error::{SwarmError, SwarmResult};
use crate::random::{
    ConstantControlParameter, ControlParameter, GaussianDistribution, ProbabilityDistribution,
};

pub trait MutationStrategy<E: Entity>: Send + Sync + fmt::Debug {
    /// Mutate `entity` in place. Returns the number of genes changed.
    fn mutate(&self, rng: &mut dyn RngCore, entity: &mut E) -> SwarmResult<usize>;

    fn mutate_all(&self, rng: &mut dyn RngCore, entities: &mut [E]) -> SwarmResult<usize> {
        let mut changed = 0;
        for entity in entities {
            changed += self.mutate(rng, entity)?;
        }
        Ok(changed)
    }
}

/// Per-gene Gaussian perturbation
///
/// Each gene mutates with the sampled mutation probability. The standard
/// deviation is `deviation_scale` times the gene's bound width, or the scale
/// itself for unbounded genes. Mutated genes are clamped back into bounds.
#[derive(Debug)]
pub struct GaussianMutation {
    mutation_probability: Box<dyn ControlParameter>,
    deviation_scale: f64,
}

impl GaussianMutation {
    pub fn new(
        mutation_probability: Box<dyn ControlParameter>,
        deviation_scale: f64,
    ) -> SwarmResult<Self> {
        if deviation_scale.is_nan() || deviation_scale < 0.0 {
            return Err(SwarmError::InvalidArgument(format!(
                "deviation scale must be non-negative, got {}",
                deviation_scale
            )));
        }
        Ok(Self {
            mutation_probability,
            deviation_scale,
        })
    }
}

impl Default for GaussianMutation {
    /// Probability 0.1, deviation a tenth of the bound width.
    fn default() -> Self {
        Self {
            mutation_probability: Box::new(ConstantControlParameter::new(0.1)),
            deviation_scale: 0.1,
        }
    }
}

impl<E: Entity> MutationStrategy<E> for GaussianMutation {
    fn mutate(&self, rng: &mut dyn RngCore, entity: &mut E) -> SwarmResult<usize> {
        let mut changed = 0;

        for gene in entity.contents_mut().iter_mut() {
            let probability = self.mutation_probability.parameter(rng);
            if rng.gen::<f64>() >= probability {
                continue;
            }
            let deviation = gene
                .bounds()
                .map_or(self.deviation_scale, |b| b.width() * self.deviation_scale);
            let delta = GaussianDistribution.sample(rng, 0.0, deviation);
            gene.set_value(gene.value() + delta);
            gene.clamp_to_bounds();
            changed += 1;
        }

        if changed > 0 {
            entity.mark_dirty();
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Fitness, Individual};
    use crate::types::{Bounds, Numeric, Vector};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bounded_individual() -> Individual {
        let bounds = Bounds::new(-1.0, 1.0).unwrap();
        Individual::with_fitness(
            Vector::new(vec![Numeric::bounded(0.9, bounds); 20]),
            Fitness::Single(0.0),
        )
    }

    #[test]
    fn test_certain_mutation_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(21);
        let mutation =
            GaussianMutation::new(Box::new(ConstantControlParameter::new(1.0)), 0.5).unwrap();
        let mut ind = bounded_individual();

        let changed = mutation.mutate(&mut rng, &mut ind).unwrap();
        assert_eq!(changed, 20);
        assert!(ind.is_dirty());
        assert!(ind.contents().is_within_bounds());
        assert!(ind.contents().iter().any(|g| g.value() != 0.9));
    }

    #[test]
    fn test_zero_probability_is_identity() {
        let mut rng = StdRng::seed_from_u64(21);
        let mutation =
            GaussianMutation::new(Box::new(ConstantControlParameter::new(0.0)), 0.5).unwrap();
        let mut population = vec![bounded_individual(), bounded_individual()];

        assert_eq!(mutation.mutate_all(&mut rng, population.as_mut_slice()).unwrap(), 0);
        assert!(population.iter().all(|i| !i.is_dirty()));
        assert_eq!(population[0], bounded_individual());
    }

    #[test]
    fn test_integer_genes_stay_feasible() {
        let mut rng = StdRng::seed_from_u64(34);
        let domain = crate::types::Domain::parse("Z(0.5, 2.5)^20").unwrap();
        let mutation =
            GaussianMutation::new(Box::new(ConstantControlParameter::new(1.0)), 1.0).unwrap();

        for _ in 0..50 {
            let mut ind = Individual::new(domain.random_vector(&mut rng).unwrap());
            mutation.mutate(&mut rng, &mut ind).unwrap();
            assert!(domain.contains(ind.contents()));
            assert!(ind.contents().iter().all(|g| g.value() == 1.0 || g.value() == 2.0));
        }
    }

    #[test]
    fn test_invalid_scale() {
        assert!(GaussianMutation::new(Box::new(ConstantControlParameter::new(0.1)), -1.0).is_err());
        assert!(GaussianMutation::new(Box::new(ConstantControlParameter::new(0.1)), f64::NAN).is_err());
    }
}
