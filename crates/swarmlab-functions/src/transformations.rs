//! WFG transformation functions
//!
//! Every function maps values from `[0, 1]` back into `[0, 1]`. Results that
//! drift outside the unit interval by floating-point noise are snapped back
//! with [`correct_to_01`].

/// Tolerance used when snapping values onto the unit interval.
pub const EPSILON: f64 = 1.0e-10;

/// Snap values within [`EPSILON`] of 0 or 1 onto the interval boundary.
pub fn correct_to_01(a: f64) -> f64 {
    if (-EPSILON..=0.0).contains(&a) {
        0.0
    } else if (1.0..=1.0 + EPSILON).contains(&a) {
        1.0
    } else {
        a
    }
}

/// Parameter-dependent bias: `y` raised to a power controlled by `u`.
pub fn b_param(y: f64, u: f64, a: f64, b: f64, c: f64) -> f64 {
    let v = a - (1.0 - 2.0 * u) * ((0.5 - u).floor() + a).abs();
    correct_to_01(y.powf(b + (c - b) * v))
}

/// Linear shift with its optimum at `a`.
pub fn s_linear(y: f64, a: f64) -> f64 {
    correct_to_01((y - a).abs() / ((a - y).floor() + a).abs())
}

/// Multi-modal shift with `a` minima, hill size `b`, optimum at `c`.
pub fn s_multi(y: f64, a: f64, b: f64, c: f64) -> f64 {
    let tmp1 = (y - c).abs() / (2.0 * ((c - y).floor() + c));
    let tmp2 = (4.0 * a + 2.0) * std::f64::consts::PI * (0.5 - tmp1);

    correct_to_01((1.0 + tmp2.cos() + 4.0 * b * tmp1 * tmp1) / (b + 2.0))
}

/// Weighted sum reduction.
///
/// `y` and `w` must have the same length and `w` must not sum to zero.
pub fn r_sum(y: &[f64], w: &[f64]) -> f64 {
    let numerator: f64 = y.iter().zip(w).map(|(yi, wi)| yi * wi).sum();
    let denominator: f64 = w.iter().sum();

    correct_to_01(numerator / denominator)
}
