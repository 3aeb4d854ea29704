//! Cluster validity indices

use std::fmt;

use tracing::debug;

use super::centroid::{CentroidHolder, ClusterCentroid};
use super::distance::{DistanceMeasure, EuclideanDistance};
use crate::error::{SwarmError, SwarmResult};

/// Added to the largest intra-cluster distance before dividing by it, so a
/// cluster with fewer than two members yields a huge ratio instead of a
/// division by zero. This is the smallest positive subnormal `f64`.
pub const DIVISION_GUARD: f64 = f64::MIN_POSITIVE * f64::EPSILON;

/// Scores a clustering held in a [`CentroidHolder`]
pub trait ValidityIndex: Send + Sync + fmt::Debug {
    fn evaluate(&self, holder: &CentroidHolder) -> SwarmResult<f64>;
}

/// Dunn index: smallest ratio of inter-cluster separation to cluster
/// diameter. Higher is better.
#[derive(Clone, Debug, Default)]
pub struct DunnIndex<D = EuclideanDistance> {
    distance: D,
}

impl DunnIndex<EuclideanDistance> {
    pub fn euclidean() -> Self {
        Self::new(EuclideanDistance)
    }
}

impl<D: DistanceMeasure> DunnIndex<D> {
    pub fn new(distance: D) -> Self {
        Self { distance }
    }

    /// Smallest distance between a member of `c1` and a member of `c2`.
    /// Infinite when either cluster is empty.
    pub fn minimum_inter_cluster_distance(
        &self,
        c1: &ClusterCentroid,
        c2: &ClusterCentroid,
    ) -> SwarmResult<f64> {
        let mut minimum = f64::INFINITY;
        for a in c1.data_items() {
            for b in c2.data_items() {
                minimum = minimum.min(self.distance.distance(a.view(), b.view())?);
            }
        }
        Ok(minimum)
    }

    /// Largest distance between two members of `c`, plus [`DIVISION_GUARD`].
    pub fn maximum_intra_cluster_distance(&self, c: &ClusterCentroid) -> SwarmResult<f64> {
        let items = c.data_items();
        let mut maximum: f64 = 0.0;
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                maximum = maximum.max(self.distance.distance(a.view(), b.view())?);
            }
        }
        Ok(maximum + DIVISION_GUARD)
    }
}

impl<D: DistanceMeasure> ValidityIndex for DunnIndex<D> {
    fn evaluate(&self, holder: &CentroidHolder) -> SwarmResult<f64> {
        if holder.len() < 2 {
            return Err(SwarmError::InsufficientData(format!(
                "Dunn index needs at least 2 centroids, got {}",
                holder.len()
            )));
        }

        let mut minimum = f64::INFINITY;
        for (i, c1) in holder.iter().enumerate() {
            let diameter = self.maximum_intra_cluster_distance(c1)?;
            for (j, c2) in holder.iter().enumerate() {
                if i == j {
                    continue;
                }
                let ratio = self.minimum_inter_cluster_distance(c1, c2)? / diameter;
                minimum = minimum.min(ratio);
            }
        }

        debug!(centroids = holder.len(), index = minimum, "computed Dunn index");
        Ok(minimum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::distance::ManhattanDistance;
    use ndarray::array;

    fn holder() -> CentroidHolder {
        CentroidHolder::from_centroids(vec![
            ClusterCentroid::with_data(array![0.0, 0.5], vec![array![0.0, 0.0], array![0.0, 1.0]]),
            ClusterCentroid::with_data(array![5.0, 1.0], vec![array![5.0, 0.0], array![5.0, 2.0]]),
        ])
    }

    #[test]
    fn test_two_clusters() {
        // min separation 5, diameters 1 and 2 => min(5/1, 5/2)
        let index = DunnIndex::euclidean().evaluate(&holder()).unwrap();
        assert!((index - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_pluggable_distance() {
        let index = DunnIndex::new(ManhattanDistance).evaluate(&holder()).unwrap();
        assert!((index - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_singleton_cluster_does_not_dominate() {
        let mut h = holder();
        h.push(ClusterCentroid::with_data(array![20.0, 20.0], vec![array![20.0, 20.0]]));
        let dunn = DunnIndex::euclidean();

        let diameter = dunn.maximum_intra_cluster_distance(h.get(2).unwrap()).unwrap();
        assert_eq!(diameter, DIVISION_GUARD);
        assert!(diameter > 0.0);

        let index = dunn.evaluate(&h).unwrap();
        assert!((index - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_too_few_centroids() {
        let mut h = holder();
        h.remove(1).unwrap();
        assert!(matches!(
            DunnIndex::euclidean().evaluate(&h),
            Err(SwarmError::InsufficientData(_))
        ));
        assert!(DunnIndex::euclidean().evaluate(&CentroidHolder::new()).is_err());
    }

    #[test]
    fn test_default_uses_euclidean() {
        let explicit = DunnIndex::<EuclideanDistance>::default().evaluate(&holder()).unwrap();
        let named = DunnIndex::euclidean().evaluate(&holder()).unwrap();
        assert_eq!(explicit, named);
    }

    #[test]
    fn test_evaluation_is_read_only() {
        let h = holder();
        let before = h.clone();
        DunnIndex::euclidean().evaluate(&h).unwrap();
        assert_eq!(h, before);
    }
}
