//! Selection strategies
//!
//! A strategy picks one entity out of a topology's entities without
//! modifying them. Successive calls are independent draws: callers that need distinct
//! parents have to check for themselves.

pub mod elitist;
pub mod random;
pub mod tournament;

use std::fmt;

use rand::RngCore;

pub use elitist::ElitistSelection;
pub use random::RandomSelection;
pub use tournament::TournamentSelection;

use crate::entity::Entity;
use crate::error::{SwarmError, SwarmResult};

pub trait SelectionStrategy<E: Entity>: Send + Sync + fmt::Debug {
    fn select<'a>(
        &self,
        rng: &mut dyn RngCore,
        entities: &'a [E],
    ) -> SwarmResult<&'a E>;
}

fn ensure_not_empty<E>(entities: &[E]) -> SwarmResult<()> {
    if entities.is_empty() {
        return Err(SwarmError::InsufficientData(
            "cannot select from an empty topology".to_string(),
        ));
    }
    Ok(())
}
