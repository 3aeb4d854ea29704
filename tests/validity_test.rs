use ndarray::{array, Array1};
use swarmlab::clustering::{
    CentroidHolder, ClusterCentroid, DunnIndex, EuclideanDistance, ValidityIndex,
};
use swarmlab::measurement::{ClusteringSnapshot, Measurement, ValidityMeasurement};
use swarmlab::SwarmError;

fn four_clusters() -> CentroidHolder {
    CentroidHolder::from_centroids(vec![
        ClusterCentroid::with_data(array![0.0, 0.5], vec![array![0.0, 0.0], array![0.0, 1.0]]),
        ClusterCentroid::with_data(array![5.0, 1.0], vec![array![5.0, 0.0], array![5.0, 2.0]]),
        ClusterCentroid::with_data(array![1.5, 10.0], vec![array![0.0, 10.0], array![3.0, 10.0]]),
        ClusterCentroid::with_data(array![10.0, 10.5], vec![array![10.0, 10.0], array![10.0, 11.0]]),
    ])
}

#[test]
fn test_dunn_index_four_clusters() {
    // Tightest ratio: separation 7 between the top clusters over diameter 3
    let index = DunnIndex::euclidean().evaluate(&four_clusters()).unwrap();
    assert!((index - 7.0 / 3.0).abs() < 1e-9, "got {}", index);
}

#[test]
fn test_dunn_index_after_assign() {
    let mut holder = CentroidHolder::from_centroids(vec![
        ClusterCentroid::new(array![0.0, 0.0]),
        ClusterCentroid::new(array![10.0, 0.0]),
    ]);
    let data: Vec<Array1<f64>> = vec![
        array![0.0, 0.0],
        array![1.0, 0.0],
        array![9.0, 0.0],
        array![10.0, 0.0],
    ];
    holder.assign(&data, &EuclideanDistance).unwrap();

    let index = DunnIndex::euclidean().evaluate(&holder).unwrap();
    assert!((index - 8.0).abs() < 1e-9);
}

#[test]
fn test_holder_clone_is_independent() {
    let original = four_clusters();
    let mut copy = original.clone();
    copy.remove(3).unwrap();
    copy.remove(0).unwrap();

    assert_eq!(original.len(), 4);
    assert_eq!(copy.len(), 2);
    let index = DunnIndex::euclidean().evaluate(&original).unwrap();
    assert!((index - 7.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_single_centroid_is_insufficient() {
    let mut holder = four_clusters();
    while holder.len() > 1 {
        holder.remove(0).unwrap();
    }
    assert!(matches!(
        DunnIndex::euclidean().evaluate(&holder),
        Err(SwarmError::InsufficientData(_))
    ));
}

struct FixedClustering(CentroidHolder);

impl ClusteringSnapshot for FixedClustering {
    fn best_holder(&self) -> Option<&CentroidHolder> {
        Some(&self.0)
    }
}

#[test]
fn test_validity_measurement() {
    let algorithm = FixedClustering(four_clusters());
    let value = ValidityMeasurement::new(DunnIndex::euclidean())
        .value(&algorithm)
        .unwrap();
    assert!((value - 7.0 / 3.0).abs() < 1e-9);
}
