use tracing::debug;

use super::{ClusteringSnapshot, Measurement};
use crate::clustering::{DunnIndex, ValidityIndex};
use crate::error::{SwarmError, SwarmResult};

/// Applies a validity index to the best centroid holder of a clustering
/// algorithm
#[derive(Clone, Debug, Default)]
pub struct ValidityMeasurement<V = DunnIndex> {
    index: V,
}

impl<V: ValidityIndex> ValidityMeasurement<V> {
    pub fn new(index: V) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &V {
        &self.index
    }
}

impl<A, V> Measurement<A> for ValidityMeasurement<V>
where
    A: ClusteringSnapshot + ?Sized,
    V: ValidityIndex,
{
    fn value(&self, algorithm: &A) -> SwarmResult<f64> {
        let holder = algorithm.best_holder().ok_or_else(|| {
            SwarmError::InsufficientData("algorithm has no best solution yet".to_string())
        })?;
        let value = self.index.evaluate(holder)?;
        debug!(value, "validity measurement");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::{CentroidHolder, ClusterCentroid};
    use ndarray::array;

    struct Clustering(Option<CentroidHolder>);

    impl ClusteringSnapshot for Clustering {
        fn best_holder(&self) -> Option<&CentroidHolder> {
            self.0.as_ref()
        }
    }

    #[test]
    fn test_measures_best_holder() {
        let holder = CentroidHolder::from_centroids(vec![
            ClusterCentroid::with_data(array![0.0], vec![array![0.0], array![1.0]]),
            ClusterCentroid::with_data(array![5.0], vec![array![4.0], array![5.0]]),
        ]);
        let value = ValidityMeasurement::<DunnIndex>::default()
            .value(&Clustering(Some(holder)))
            .unwrap();
        assert!((value - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_best_solution() {
        let measurement = ValidityMeasurement::new(DunnIndex::euclidean());
        assert!(measurement.value(&Clustering(None)).is_err());
    }
}
