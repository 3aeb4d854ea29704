//! WFG toolkit problems
//!
//! A WFG problem maps `n = k + l` decision variables to `m` objectives. The
//! first `k` variables are position parameters, the remaining `l` are
//! distance parameters. Variable `j` (0-based) lives in `[0, 2 * (j + 1)]`.
//!
//! Every problem runs the same pipeline: normalise into `[0, 1]`, apply the
//! problem-specific transitions, reduce to `m` values, then map onto a front
//! through the shape functions.

use thiserror::Error;

use crate::shapes::concave;
use crate::transformations::{b_param, correct_to_01, r_sum, s_linear, s_multi};

/// Errors raised by the WFG kernels
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WfgError {
    #[error("invalid WFG parameters: {0}")]
    InvalidParameters(String),

    #[error("expected {expected} decision variables, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("variable {index} = {value} lies outside [0, {upper}]")]
    OutOfDomain { index: usize, value: f64, upper: f64 },
}

/// Size parameters shared by every problem in the family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WfgParams {
    /// Number of position parameters
    pub k: usize,
    /// Number of distance parameters
    pub l: usize,
    /// Number of objectives
    pub m: usize,
}

impl WfgParams {
    pub fn new(k: usize, l: usize, m: usize) -> Result<Self, WfgError> {
        if m < 2 {
            return Err(WfgError::InvalidParameters(format!(
                "at least 2 objectives are required, got {}",
                m
            )));
        }
        if k == 0 || k % (m - 1) != 0 {
            return Err(WfgError::InvalidParameters(format!(
                "k = {} must be a positive multiple of m - 1 = {}",
                k,
                m - 1
            )));
        }
        if l == 0 {
            return Err(WfgError::InvalidParameters(
                "at least 1 distance parameter is required".to_string(),
            ));
        }
        Ok(Self { k, l, m })
    }

    /// Total number of decision variables.
    pub fn dimension(&self) -> usize {
        self.k + self.l
    }

    /// Upper bound of variable `j`.
    pub fn upper_bound(j: usize) -> f64 {
        2.0 * (j + 1) as f64
    }
}

fn normalise(z: &[f64], params: &WfgParams) -> Result<Vec<f64>, WfgError> {
    if z.len() != params.dimension() {
        return Err(WfgError::DimensionMismatch {
            expected: params.dimension(),
            actual: z.len(),
        });
    }

    z.iter()
        .enumerate()
        .map(|(index, &value)| {
            let upper = WfgParams::upper_bound(index);
            if !(0.0..=upper).contains(&value) {
                return Err(WfgError::OutOfDomain { index, value, upper });
            }
            Ok(correct_to_01(value / upper))
        })
        .collect()
}

/// Reduce the `k` position parameters into `m - 1` groups and the distance
/// parameters into a single value.
fn reduce(y: &[f64], params: &WfgParams) -> Vec<f64> {
    let WfgParams { k, m, .. } = *params;
    let group = k / (m - 1);
    let ones = vec![1.0; y.len()];

    let mut t: Vec<f64> = (0..m - 1)
        .map(|i| {
            let head = i * group;
            let tail = head + group;
            r_sum(&y[head..tail], &ones[head..tail])
        })
        .collect();
    t.push(r_sum(&y[k..], &ones[k..]));
    t
}

/// Concave front with `A = 1`, `S_m = 2m` and `D = 1`.
fn concave_front(t: &[f64]) -> Vec<f64> {
    let m = t.len();
    let distance = t[m - 1];

    let mut x: Vec<f64> = t[..m - 1]
        .iter()
        .map(|ti| distance.max(1.0) * (ti - 0.5) + 0.5)
        .collect();
    x.push(distance);

    (1..=m)
        .map(|obj| distance + 2.0 * obj as f64 * concave(&x, obj))
        .collect()
}

/// WFG4: multi-modal shift on every variable, concave front.
pub fn wfg4(z: &[f64], params: &WfgParams) -> Result<Vec<f64>, WfgError> {
    let y: Vec<f64> = normalise(z, params)?
        .into_iter()
        .map(|yi| s_multi(yi, 30.0, 10.0, 0.35))
        .collect();

    Ok(concave_front(&reduce(&y, params)))
}

/// WFG8: distance parameters biased by the mean of all preceding variables,
/// then shifted; concave front.
pub fn wfg8(z: &[f64], params: &WfgParams) -> Result<Vec<f64>, WfgError> {
    let k = params.k;
    let mut y = normalise(z, params)?;

    // The bias for variable i depends on the untransformed y[..i]
    let biased: Vec<f64> = (k..y.len())
        .map(|i| {
            let ones = vec![1.0; i];
            let u = r_sum(&y[..i], &ones);
            b_param(y[i], u, 0.98 / 49.98, 0.02, 50.0)
        })
        .collect();
    for (yi, bi) in y[k..].iter_mut().zip(biased) {
        *yi = s_linear(bi, 0.35);
    }

    Ok(concave_front(&reduce(&y, params)))
}
