use serde::{Deserialize, Serialize};

use super::{check_index, Topology};
use crate::entity::Entity;
use crate::error::SwarmResult;

/// Ring topology: each entity neighbours the `neighbourhood_size` entities
/// centred on itself, wrapping around the ends.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LBestTopology<E> {
    entities: Vec<E>,
    neighbourhood_size: usize,
}

impl<E: Entity> LBestTopology<E> {
    pub fn new(neighbourhood_size: usize) -> Self {
        Self {
            entities: Vec::new(),
            neighbourhood_size: neighbourhood_size.max(1),
        }
    }

    pub fn from_entities(entities: Vec<E>, neighbourhood_size: usize) -> Self {
        Self {
            entities,
            neighbourhood_size: neighbourhood_size.max(1),
        }
    }

    pub fn neighbourhood_size(&self) -> usize {
        self.neighbourhood_size
    }
}

impl<E: Entity> Default for LBestTopology<E> {
    fn default() -> Self {
        Self::new(3)
    }
}

impl<E: Entity> Topology<E> for LBestTopology<E> {
    fn entities(&self) -> &[E] {
        &self.entities
    }

    fn entities_mut(&mut self) -> &mut [E] {
        &mut self.entities
    }

    fn add(&mut self, entity: E) {
        self.entities.push(entity);
    }

    fn remove(&mut self, index: usize) -> SwarmResult<E> {
        check_index(index, self.entities.len())?;
        Ok(self.entities.remove(index))
    }

    fn neighbourhood(&self, index: usize) -> SwarmResult<Vec<usize>> {
        let n = self.entities.len();
        check_index(index, n)?;

        let size = self.neighbourhood_size.min(n);
        let start = index + n - size / 2;
        Ok((0..size).map(|offset| (start + offset) % n).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Fitness, Individual};
    use crate::types::Vector;

    fn ring(fitnesses: &[f64], size: usize) -> LBestTopology<Individual> {
        LBestTopology::from_entities(
            fitnesses
                .iter()
                .map(|&f| Individual::with_fitness(Vector::from_values(&[f]), Fitness::Single(f)))
                .collect(),
            size,
        )
    }

    #[test]
    fn test_ring_wraps() {
        let t = ring(&[5.0, 4.0, 3.0, 2.0, 1.0], 3);
        assert_eq!(t.neighbourhood(0).unwrap(), vec![4, 0, 1]);
        assert_eq!(t.neighbourhood(2).unwrap(), vec![1, 2, 3]);
        assert_eq!(t.neighbourhood(4).unwrap(), vec![3, 4, 0]);
    }

    #[test]
    fn test_local_best_differs_from_global() {
        let t = ring(&[5.0, 4.0, 3.0, 2.0, 1.0], 3);
        assert_eq!(t.neighbourhood_best(1).unwrap().fitness(), &Fitness::Single(3.0));
        assert_eq!(t.neighbourhood_best(0).unwrap().fitness(), &Fitness::Single(1.0));
        assert_eq!(t.best().unwrap().fitness(), &Fitness::Single(1.0));
    }

    #[test]
    fn test_neighbourhood_capped_by_population() {
        let t = ring(&[1.0, 2.0], 5);
        assert_eq!(t.neighbourhood(0).unwrap().len(), 2);
    }
}
