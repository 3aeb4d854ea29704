//! Numeric vectors, bounds and problem domains

pub mod bounds;
pub mod domain;
pub mod vector;

pub use bounds::Bounds;
pub use domain::Domain;
pub use vector::{Numeric, NumericKind, Vector};
