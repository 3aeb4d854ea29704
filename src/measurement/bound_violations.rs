use tracing::trace;

use super::{AlgorithmSnapshot, Measurement};
use crate::entity::Entity;
use crate::error::{SwarmError, SwarmResult};

/// Mean number of dimensions per entity that lie outside their bounds.
/// Bounds are inclusive; unbounded dimensions never count.
#[derive(Clone, Copy, Debug, Default)]
pub struct DimensionBoundViolationsPerEntity;

impl<A: AlgorithmSnapshot + ?Sized> Measurement<A> for DimensionBoundViolationsPerEntity {
    fn value(&self, algorithm: &A) -> SwarmResult<f64> {
        let entities = algorithm.entities();
        if entities.is_empty() {
            return Err(SwarmError::InsufficientData(
                "no entities to measure".to_string(),
            ));
        }

        let violations: usize = entities
            .iter()
            .map(|e| e.contents().bound_violations())
            .sum();
        trace!(violations, entities = entities.len(), "bound violations");
        Ok(violations as f64 / entities.len() as f64)
    }
}
