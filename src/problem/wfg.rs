//! WFG benchmark problems assembled from per-objective sub-problems
//!
//! Each objective `i` is its own [`FunctionProblem`] that runs the full WFG
//! pipeline and keeps output `i`. The `*_shared` variants attach the
//! pipeline as a shared transform so it runs once per evaluation.

use swarmlab_functions::{WfgError, WfgParams};

use super::{FunctionProblem, MultiObjectiveProblem};
use crate::error::{SwarmError, SwarmResult};

type Kernel = fn(&[f64], &WfgParams) -> Result<Vec<f64>, WfgError>;

/// `R(0, 2), R(0, 4), ...`: the upper bound grows with the variable index.
fn domain_string(params: &WfgParams) -> String {
    (0..params.dimension())
        .map(|j| format!("R(0, {})", WfgParams::upper_bound(j)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn build(params: WfgParams, kernel: Kernel, shared: bool) -> SwarmResult<MultiObjectiveProblem> {
    let domain = domain_string(&params);
    let mut problem = MultiObjectiveProblem::new();

    for index in 0..params.m {
        let objective = FunctionProblem::from_domain_str(&domain, move |x: &[f64]| {
            let y = kernel(x, &params)?;
            y.get(index).copied().ok_or_else(|| {
                SwarmError::Domain(format!("objective {} missing from WFG output", index))
            })
        })?;
        problem.add(objective)?;
    }

    tracing::debug!(k = params.k, l = params.l, m = params.m, shared, "built WFG problem");

    if shared {
        Ok(problem.with_shared_transform(move |x: &[f64]| Ok(kernel(x, &params)?)))
    } else {
        Ok(problem)
    }
}

pub fn wfg4(params: WfgParams) -> SwarmResult<MultiObjectiveProblem> {
    build(params, swarmlab_functions::wfg4, false)
}

pub fn wfg4_shared(params: WfgParams) -> SwarmResult<MultiObjectiveProblem> {
    build(params, swarmlab_functions::wfg4, true)
}

pub fn wfg8(params: WfgParams) -> SwarmResult<MultiObjectiveProblem> {
    build(params, swarmlab_functions::wfg8, false)
}

pub fn wfg8_shared(params: WfgParams) -> SwarmResult<MultiObjectiveProblem> {
    build(params, swarmlab_functions::wfg8, true)
}
