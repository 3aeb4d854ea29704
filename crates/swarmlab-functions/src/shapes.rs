//! WFG shape functions
//!
//! `m` is 1-based and ranges over `1..=x.len()`, where `x` is the full
//! position vector including the distance component in the last slot.

use std::f64::consts::FRAC_PI_2;

use crate::transformations::correct_to_01;

/// Concave (spherical) front.
pub fn concave(x: &[f64], m: usize) -> f64 {
    let big_m = x.len();
    let mut result = 1.0;

    for xi in &x[..big_m - m] {
        result *= (xi * FRAC_PI_2).sin();
    }

    if m != 1 {
        result *= (x[big_m - m] * FRAC_PI_2).cos();
    }

    correct_to_01(result)
}
