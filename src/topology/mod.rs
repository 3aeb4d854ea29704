//! Population topologies
//!
//! A topology owns the entities of one population and defines who
//! neighbours whom. Iteration order is the insertion order and stays stable
//! until the next `add` or `remove`.

pub mod gbest;
pub mod lbest;

pub use gbest::GBestTopology;
pub use lbest::LBestTopology;

use crate::entity::{best_index, Entity};
use crate::error::{SwarmError, SwarmResult};

/// Structured population with a neighbour relation
pub trait Topology<E: Entity>: Send + Sync {
    fn entities(&self) -> &[E];

    fn entities_mut(&mut self) -> &mut [E];

    fn add(&mut self, entity: E);

    /// Remove and return the entity at `index`, shifting later entities down.
    fn remove(&mut self, index: usize) -> SwarmResult<E>;

    /// Indices of the neighbours of `index`, including `index` itself.
    fn neighbourhood(&self, index: usize) -> SwarmResult<Vec<usize>>;

    fn len(&self) -> usize {
        self.entities().len()
    }

    fn is_empty(&self) -> bool {
        self.entities().is_empty()
    }

    fn get(&self, index: usize) -> Option<&E> {
        self.entities().get(index)
    }

    fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entities().iter()
    }

    fn extend<I: IntoIterator<Item = E>>(&mut self, entities: I)
    where
        Self: Sized,
    {
        for entity in entities {
            self.add(entity);
        }
    }

    /// Best entity in the neighbourhood of `index`.
    fn neighbourhood_best(&self, index: usize) -> SwarmResult<&E> {
        let neighbours = self.neighbourhood(index)?;
        best_index(self.entities(), neighbours)
            .map(|i| &self.entities()[i])
            .ok_or_else(|| SwarmError::InsufficientData("empty neighbourhood".to_string()))
    }

    /// Best entity in the whole topology.
    fn best(&self) -> Option<&E> {
        best_index(self.entities(), 0..self.len()).map(|i| &self.entities()[i])
    }
}

fn check_index(index: usize, len: usize) -> SwarmResult<()> {
    if index >= len {
        return Err(SwarmError::IndexOutOfRange { index, len });
    }
    Ok(())
}
