use serde::{Deserialize, Serialize};

/// Fitness of an entity. Lower is better.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum Fitness {
    /// Not evaluated yet, or infeasible; worse than anything else
    #[default]
    Inferior,
    Single(f64),
    Multi(Vec<f64>),
}

impl Fitness {
    /// Strict improvement. `Multi` values compare by Pareto dominance, and
    /// values of different kinds never beat each other.
    pub fn is_better_than(&self, other: &Fitness) -> bool {
        match (self, other) {
            (Fitness::Inferior, _) => false,
            (_, Fitness::Inferior) => true,
            (Fitness::Single(a), Fitness::Single(b)) => a < b,
            (Fitness::Multi(a), Fitness::Multi(b)) => dominates(a, b),
            _ => false,
        }
    }

    pub fn single(&self) -> Option<f64> {
        match self {
            Fitness::Single(v) => Some(*v),
            _ => None,
        }
    }

    pub fn objectives(&self) -> Option<&[f64]> {
        match self {
            Fitness::Multi(v) => Some(v),
            _ => None,
        }
    }
}

/// `f1` is no worse than `f2` everywhere and strictly better somewhere.
pub fn dominates(f1: &[f64], f2: &[f64]) -> bool {
    if f1.len() != f2.len() {
        return false;
    }
    let mut better = false;
    for (a, b) in f1.iter().zip(f2) {
        if a > b {
            return false;
        }
        if a < b {
            better = true;
        }
    }
    better
}
