//! Benchmark function kernels for swarmlab
//!
//! Pure functions over `&[f64]`: the WFG toolkit transformation and shape
//! functions, and the WFG problem pipelines built from them.

pub mod shapes;
pub mod transformations;
pub mod wfg;

pub use wfg::{wfg4, wfg8, WfgError, WfgParams};
