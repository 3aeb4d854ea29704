use serde::{Deserialize, Serialize};

use super::{check_index, Topology};
use crate::entity::Entity;
use crate::error::SwarmResult;

/// Fully connected topology: every entity neighbours every other entity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GBestTopology<E> {
    entities: Vec<E>,
}

impl<E: Entity> GBestTopology<E> {
    pub fn new() -> Self {
        Self { entities: Vec::new() }
    }

    pub fn from_entities(entities: Vec<E>) -> Self {
        Self { entities }
    }

    pub fn into_entities(self) -> Vec<E> {
        self.entities
    }
}

impl<E: Entity> Default for GBestTopology<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Topology<E> for GBestTopology<E> {
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
        check_index(index, self.entities.len())?;
        Ok((0..self.entities.len()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Fitness, Individual};
    use crate::error::SwarmError;
    use crate::types::Vector;

    fn topology() -> GBestTopology<Individual> {
        GBestTopology::from_entities(
            [3.0, 1.0, 2.0]
                .iter()
                .map(|&f| Individual::with_fitness(Vector::from_values(&[f]), Fitness::Single(f)))
                .collect(),
        )
    }

    #[test]
    fn test_everyone_is_a_neighbour() {
        let t = topology();
        assert_eq!(t.neighbourhood(0).unwrap(), vec![0, 1, 2]);
        assert_eq!(t.neighbourhood_best(2).unwrap().fitness(), &Fitness::Single(1.0));
        assert_eq!(t.best().unwrap().fitness(), &Fitness::Single(1.0));
    }

    #[test]
    fn test_add_remove() {
        let mut t = topology();
        let removed = t.remove(1).unwrap();
        assert_eq!(removed.fitness(), &Fitness::Single(1.0));
        assert_eq!(t.len(), 2);
        assert!(matches!(t.remove(5), Err(SwarmError::IndexOutOfRange { index: 5, len: 2 })));
        t.add(removed);
        assert_eq!(t.iter().last().unwrap().fitness(), &Fitness::Single(1.0));
    }

    #[test]
    fn test_empty() {
        let t: GBestTopology<Individual> = GBestTopology::new();
        assert!(t.is_empty());
        assert!(t.best().is_none());
        assert!(t.neighbourhood(0).is_err());
    }
}
