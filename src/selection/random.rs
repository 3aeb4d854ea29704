use rand::{Rng, RngCore};

use super::{ensure_not_empty, SelectionStrategy};
use crate::entity::Entity;
use crate::error::SwarmResult;

/// Uniform choice among all entities currently in the topology
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSelection;

impl<E: Entity> SelectionStrategy<E> for RandomSelection {
    fn select<'a>(
        &self,
        rng: &mut dyn RngCore,
        entities: &'a [E],
    ) -> SwarmResult<&'a E> {
        ensure_not_empty(entities)?;
        let index = rng.gen_range(0..entities.len());
        Ok(&entities[index])
    }
}
