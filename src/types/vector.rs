//! Numeric vectors
//!
//! A [`Vector`] is the candidate-solution representation carried by every
//! entity. Each element keeps its own optional [`Bounds`] so operators can
//! copy genes between vectors without losing domain information.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use crate::error::{SwarmError, SwarmResult};

/// Value class of a numeric element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumericKind {
    #[default]
    Real,
    Integer,
    Bit,
}

/// A single bounded value
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Numeric {
    value: f64,
    bounds: Option<Bounds>,
    kind: NumericKind,
}

impl Numeric {
    pub fn real(value: f64) -> Self {
        Self { value, bounds: None, kind: NumericKind::Real }
    }

    pub fn bounded(value: f64, bounds: Bounds) -> Self {
        Self { value, bounds: Some(bounds), kind: NumericKind::Real }
    }

    pub fn with_kind(value: f64, bounds: Option<Bounds>, kind: NumericKind) -> Self {
        let mut numeric = Self { value: 0.0, bounds, kind };
        numeric.set_value(value);
        numeric
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Integers are rounded and bits thresholded at 0.5.
    pub fn set_value(&mut self, value: f64) {
        self.value = match self.kind {
            NumericKind::Real => value,
            NumericKind::Integer => value.round(),
            NumericKind::Bit => {
                if value >= 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
        };
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
    }

    pub fn kind(&self) -> NumericKind {
        self.kind
    }

    /// Unbounded values are always in bounds.
    pub fn is_within_bounds(&self) -> bool {
        self.bounds.map_or(true, |b| b.contains(self.value))
    }

    /// Integers clamp to the integers inside the bounds, so the rounded
    /// result never leaves them.
    pub fn clamp_to_bounds(&mut self) {
        let Some(b) = self.bounds else { return };
        match self.kind {
            NumericKind::Integer => {
                let (lo, hi) = (b.lower().ceil(), b.upper().floor());
                self.value = if lo <= hi {
                    self.value.round().clamp(lo, hi)
                } else {
                    b.clamp(self.value)
                };
            }
            _ => {
                let clamped = b.clamp(self.value);
                self.set_value(clamped);
            }
        }
    }
}

/// Ordered sequence of [`Numeric`] elements
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    elements: Vec<Numeric>,
}

impl Vector {
    pub fn new(elements: Vec<Numeric>) -> Self {
        Self { elements }
    }

    /// Unbounded real vector.
    pub fn from_values(values: &[f64]) -> Self {
        values.iter().copied().map(Numeric::real).collect()
    }

    pub fn dimension(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> SwarmResult<&Numeric> {
        self.elements.get(index).ok_or(SwarmError::IndexOutOfRange {
            index,
            len: self.elements.len(),
        })
    }

    pub fn set(&mut self, index: usize, numeric: Numeric) -> SwarmResult<()> {
        let len = self.elements.len();
        let slot = self
            .elements
            .get_mut(index)
            .ok_or(SwarmError::IndexOutOfRange { index, len })?;
        *slot = numeric;
        Ok(())
    }

    pub fn value(&self, index: usize) -> SwarmResult<f64> {
        self.get(index).map(Numeric::value)
    }

    /// Overwrite the value at `index`, keeping the element's bounds.
    pub fn set_value(&mut self, index: usize, value: f64) -> SwarmResult<()> {
        let len = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or(SwarmError::IndexOutOfRange { index, len })?
            .set_value(value);
        Ok(())
    }

    pub fn push(&mut self, numeric: Numeric) {
        self.elements.push(numeric);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Numeric> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Numeric> {
        self.elements.iter_mut()
    }

    pub fn values(&self) -> Vec<f64> {
        self.elements.iter().map(Numeric::value).collect()
    }

    pub fn to_array(&self) -> Array1<f64> {
        self.elements.iter().map(Numeric::value).collect()
    }

    /// Number of elements lying outside their bounds.
    pub fn bound_violations(&self) -> usize {
        self.elements.iter().filter(|n| !n.is_within_bounds()).count()
    }

    pub fn is_within_bounds(&self) -> bool {
        self.bound_violations() == 0
    }

    pub fn clamp_to_bounds(&mut self) {
        self.elements.iter_mut().for_each(Numeric::clamp_to_bounds);
    }

    /// Apply the same bounds to every element.
    pub fn set_all_bounds(&mut self, bounds: Bounds) {
        for n in &mut self.elements {
            n.set_bounds(bounds);
        }
    }
}

impl FromIterator<Numeric> for Vector {
    fn from_iter<I: IntoIterator<Item = Numeric>>(iter: I) -> Self {
        Self { elements: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Numeric;
    type IntoIter = std::slice::Iter<'a, Numeric>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
