//! Distance measures between data vectors
//!
//! Every measure is symmetric and fails with a domain error when the two
//! vectors differ in length.

use std::fmt;

use ndarray::ArrayView1;

use crate::error::{SwarmError, SwarmResult};

pub trait DistanceMeasure: Send + Sync + fmt::Debug {
    fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> SwarmResult<f64>;
}

fn check_lengths(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> SwarmResult<()> {
    if a.len() != b.len() {
        return Err(SwarmError::Domain(format!(
            "cannot measure distance between vectors of length {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanDistance;

impl DistanceMeasure for EuclideanDistance {
    fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> SwarmResult<f64> {
        check_lengths(&a, &b)?;
        Ok(a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanDistance;

impl DistanceMeasure for ManhattanDistance {
    fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> SwarmResult<f64> {
        check_lengths(&a, &b)?;
        Ok(a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ChebyshevDistance;

impl DistanceMeasure for ChebyshevDistance {
    fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> SwarmResult<f64> {
        check_lengths(&a, &b)?;
        Ok(a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max))
    }
}

/// Minkowski distance of order `p` (`p >= 1`)
#[derive(Clone, Copy, Debug)]
pub struct MinkowskiDistance {
    p: f64,
}

impl MinkowskiDistance {
    pub fn new(p: f64) -> SwarmResult<Self> {
        if p.is_nan() || p < 1.0 {
            return Err(SwarmError::InvalidArgument(format!(
                "Minkowski order must be at least 1, got {}",
                p
            )));
        }
        Ok(Self { p })
    }
}

impl DistanceMeasure for MinkowskiDistance {
    fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> SwarmResult<f64> {
        check_lengths(&a, &b)?;
        let sum: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs().powf(self.p)).sum();
        Ok(sum.powf(1.0 / self.p))
    }
}
