use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::{ensure_not_empty, SelectionStrategy};
use crate::entity::Entity;
use crate::error::{SwarmError, SwarmResult};

/// Best of `tournament_size` uniform draws (with replacement)
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    pub fn new(tournament_size: usize) -> SwarmResult<Self> {
        if tournament_size == 0 {
            return Err(SwarmError::InvalidArgument(
                "tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 2 }
    }
}

impl<E: Entity> SelectionStrategy<E> for TournamentSelection {
    fn select<'a>(
        &self,
        rng: &mut dyn RngCore,
        entities: &'a [E],
    ) -> SwarmResult<&'a E> {
        ensure_not_empty(entities)?;

        let mut winner = &entities[rng.gen_range(0..entities.len())];
        for _ in 1..self.tournament_size {
            let challenger = &entities[rng.gen_range(0..entities.len())];
            if challenger.fitness().is_better_than(winner.fitness()) {
                winner = challenger;
            }
        }
        Ok(winner)
    }
}
