//! Crossover strategies

use std::fmt;

use rand::{Rng, RngCore};
use tracing::trace;

use crate::entity::Entity;
use crate::error::{SwarmError, SwarmResult};
use crate::random::{ConstantControlParameter, ControlParameter};
use crate::selection::{RandomSelection, SelectionStrategy};
use crate::topology::Topology;

pub trait CrossoverStrategy<E: Entity>: Send + Sync + fmt::Debug {
    /// Produce offspring from `parents`. May return no offspring at all.
    fn crossover(&self, rng: &mut dyn RngCore, parents: &[E]) -> SwarmResult<Vec<E>>;

    /// Select parents from `topology`, cross them over and add the offspring
    /// to `offspring`.
    fn perform_operation(
        &self,
        rng: &mut dyn RngCore,
        topology: &dyn Topology<E>,
        offspring: &mut dyn Topology<E>,
    ) -> SwarmResult<()>;
}

/// Alternating-gene crossover of two parents
///
/// Once the probability gate passes, even genes come from the offspring's
/// own parent and odd genes from the other parent. Genes beyond the shorter
/// parent are left as cloned.
#[derive(Debug)]
pub struct UniformCrossover<E: Entity> {
    crossover_probability: Box<dyn ControlParameter>,
    selection: Box<dyn SelectionStrategy<E>>,
}

impl<E: Entity> UniformCrossover<E> {
    /// Probability 0.5, random parent selection.
    pub fn new() -> Self {
        Self {
            crossover_probability: Box::new(ConstantControlParameter::new(0.5)),
            selection: Box::new(RandomSelection),
        }
    }

    pub fn with_probability(mut self, probability: Box<dyn ControlParameter>) -> Self {
        self.crossover_probability = probability;
        self
    }

    pub fn with_selection(mut self, selection: Box<dyn SelectionStrategy<E>>) -> Self {
        self.selection = selection;
        self
    }
}

impl<E: Entity> Default for UniformCrossover<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> CrossoverStrategy<E> for UniformCrossover<E> {
    fn crossover(&self, rng: &mut dyn RngCore, parents: &[E]) -> SwarmResult<Vec<E>> {
        let [parent1, parent2, ..] = parents else {
            return Err(SwarmError::InvalidArgument(format!(
                "uniform crossover needs 2 parents, got {}",
                parents.len()
            )));
        };

        let mut offspring1 = parent1.clone();
        let mut offspring2 = parent2.clone();

        let probability = self.crossover_probability.parameter(rng);
        let gate: f64 = rng.gen();
        if probability < gate {
            trace!(probability, gate, "crossover skipped");
            return Ok(Vec::new());
        }

        let chromosome1 = parent1.contents();
        let chromosome2 = parent2.contents();
        let n = chromosome1.dimension().min(chromosome2.dimension());

        for i in 0..n {
            let (gene1, gene2) = if i % 2 == 0 {
                (chromosome1.get(i)?, chromosome2.get(i)?)
            } else {
                (chromosome2.get(i)?, chromosome1.get(i)?)
            };
            offspring1.contents_mut().set(i, *gene1)?;
            offspring2.contents_mut().set(i, *gene2)?;
        }

        offspring1.mark_dirty();
        offspring2.mark_dirty();

        Ok(vec![offspring1, offspring2])
    }

    fn perform_operation(
        &self,
        rng: &mut dyn RngCore,
        topology: &dyn Topology<E>,
        offspring: &mut dyn Topology<E>,
    ) -> SwarmResult<()> {
        let parents = vec![
            self.selection.select(rng, topology.entities())?.clone(),
            self.selection.select(rng, topology.entities())?.clone(),
        ];

        for child in self.crossover(rng, &parents)? {
            offspring.add(child);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Fitness, Individual};
    use crate::topology::{GBestTopology, Topology};
    use crate::types::Vector;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn individual(values: &[f64]) -> Individual {
        Individual::with_fitness(Vector::from_values(values), Fitness::Single(0.0))
    }

    fn always() -> UniformCrossover<Individual> {
        UniformCrossover::new().with_probability(Box::new(ConstantControlParameter::new(1.0)))
    }

    #[test]
    fn test_alternation() {
        let mut rng = StdRng::seed_from_u64(3);
        let parents = [individual(&[1.0, 2.0, 3.0, 4.0]), individual(&[10.0, 20.0, 30.0, 40.0])];
        let offspring = always().crossover(&mut rng, &parents).unwrap();

        assert_eq!(offspring.len(), 2);
        assert_eq!(offspring[0].contents().values(), vec![1.0, 20.0, 3.0, 40.0]);
        assert_eq!(offspring[1].contents().values(), vec![10.0, 2.0, 30.0, 4.0]);
        assert!(offspring.iter().all(|o| o.is_dirty()));
        // Parents are untouched
        assert_eq!(parents[0].contents().values(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_dimension_mismatch_tolerated() {
        let mut rng = StdRng::seed_from_u64(3);
        let parents = [
            individual(&[1.0, 2.0, 3.0]),
            individual(&[10.0, 20.0, 30.0, 40.0, 50.0]),
        ];
        let offspring = always().crossover(&mut rng, &parents).unwrap();
        assert_eq!(offspring[0].contents().values(), vec![1.0, 20.0, 3.0]);
        assert_eq!(
            offspring[1].contents().values(),
            vec![10.0, 2.0, 30.0, 40.0, 50.0]
        );
    }

    #[test]
    fn test_probability_gate() {
        let mut rng = StdRng::seed_from_u64(17);
        let parents = [individual(&[1.0, 2.0]), individual(&[3.0, 4.0])];
        let never: UniformCrossover<Individual> = UniformCrossover::new()
            .with_probability(Box::new(ConstantControlParameter::new(0.0)));
        let always = always();
        for _ in 0..1_000 {
            assert!(never.crossover(&mut rng, &parents).unwrap().is_empty());
            assert_eq!(always.crossover(&mut rng, &parents).unwrap().len(), 2);
        }
    }

    #[test]
    fn test_too_few_parents() {
        let mut rng = StdRng::seed_from_u64(3);
        let parents = [individual(&[1.0])];
        assert!(matches!(
            always().crossover(&mut rng, &parents),
            Err(SwarmError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_perform_operation_adds_offspring() {
        let mut rng = StdRng::seed_from_u64(8);
        let topology = GBestTopology::from_entities(vec![
            individual(&[1.0, 1.0]),
            individual(&[2.0, 2.0]),
            individual(&[3.0, 3.0]),
        ]);
        let mut offspring: GBestTopology<Individual> = GBestTopology::new();
        always()
            .perform_operation(&mut rng, &topology, &mut offspring)
            .unwrap();
        assert_eq!(offspring.len(), 2);
        assert_eq!(topology.len(), 3);
    }
}
