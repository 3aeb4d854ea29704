//! Cluster structures, distance measures and validity indices

pub mod centroid;
pub mod distance;
pub mod validity;

pub use centroid::{CentroidHolder, ClusterCentroid};
pub use distance::{
    ChebyshevDistance, DistanceMeasure, EuclideanDistance, ManhattanDistance, MinkowskiDistance,
};
pub use validity::{DunnIndex, ValidityIndex, DIVISION_GUARD};
