use rand::RngCore;

use super::{ensure_not_empty, SelectionStrategy};
use crate::entity::{best_index, Entity};
use crate::error::{SwarmError, SwarmResult};

/// Always picks the best entity; ties go to the earliest
#[derive(Clone, Copy, Debug, Default)]
pub struct ElitistSelection;

impl<E: Entity> SelectionStrategy<E> for ElitistSelection {
    fn select<'a>(
        &self,
        _rng: &mut dyn RngCore,
        entities: &'a [E],
    ) -> SwarmResult<&'a E> {
        ensure_not_empty(entities)?;
        best_index(entities, 0..entities.len())
            .map(|i| &entities[i])
            .ok_or_else(|| SwarmError::InsufficientData("no best entity".to_string()))
    }
}
