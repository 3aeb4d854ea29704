use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::distance::DistanceMeasure;
use crate::error::{SwarmError, SwarmResult};

/// A cluster representative and the data vectors assigned to it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterCentroid {
    centroid: Array1<f64>,
    data_items: Vec<Array1<f64>>,
}

impl ClusterCentroid {
    pub fn new(centroid: Array1<f64>) -> Self {
        Self {
            centroid,
            data_items: Vec::new(),
        }
    }

    pub fn with_data(centroid: Array1<f64>, data_items: Vec<Array1<f64>>) -> Self {
        Self { centroid, data_items }
    }

    pub fn centroid(&self) -> &Array1<f64> {
        &self.centroid
    }

    pub fn data_items(&self) -> &[Array1<f64>] {
        &self.data_items
    }

    pub fn add_data_item(&mut self, item: Array1<f64>) {
        self.data_items.push(item);
    }

    pub fn clear_data_items(&mut self) {
        self.data_items.clear();
    }
}

/// Ordered collection of centroids; usually the position of the best
/// solution in a clustering run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CentroidHolder {
    centroids: Vec<ClusterCentroid>,
}

impl CentroidHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_centroids(centroids: Vec<ClusterCentroid>) -> Self {
        Self { centroids }
    }

    pub fn len(&self) -> usize {
        self.centroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ClusterCentroid> {
        self.centroids.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClusterCentroid> {
        self.centroids.iter()
    }

    pub fn push(&mut self, centroid: ClusterCentroid) {
        self.centroids.push(centroid);
    }

    pub fn remove(&mut self, index: usize) -> SwarmResult<ClusterCentroid> {
        if index >= self.centroids.len() {
            return Err(SwarmError::IndexOutOfRange {
                index,
                len: self.centroids.len(),
            });
        }
        Ok(self.centroids.remove(index))
    }

    /// Reassign `data` so each vector belongs to its nearest centroid only.
    /// Ties go to the earlier centroid.
    pub fn assign(&mut self, data: &[Array1<f64>], distance: &dyn DistanceMeasure) -> SwarmResult<()> {
        if self.centroids.is_empty() {
            return Err(SwarmError::InsufficientData(
                "cannot assign data to an empty centroid holder".to_string(),
            ));
        }

        for c in &mut self.centroids {
            c.clear_data_items();
        }

        for item in data {
            let mut nearest = 0;
            let mut nearest_distance = f64::INFINITY;
            for (i, c) in self.centroids.iter().enumerate() {
                let d = distance.distance(item.view(), c.centroid.view())?;
                if d < nearest_distance {
                    nearest = i;
                    nearest_distance = d;
                }
            }
            self.centroids[nearest].add_data_item(item.clone());
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CentroidHolder {
    type Item = &'a ClusterCentroid;
    type IntoIter = std::slice::Iter<'a, ClusterCentroid>;

    fn into_iter(self) -> Self::IntoIter {
        self.centroids.iter()
    }
}
