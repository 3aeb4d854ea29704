//! Problem domains and the textual domain format
//!
//! A domain string lists one entry per decision variable, separated by
//! commas:
//!
//! ```text
//! R(0, 2), R(-5.12, 5.12)^3, Z(0, 10), B
//! ```
//!
//! `R` is a real value, `Z` an integer and `B` a bit. Bounds are optional
//! for `R` and `Z`; `^n` repeats an entry `n` times.

use std::fmt;
use std::sync::OnceLock;

use rand::{Rng, RngCore};
use regex::Regex;

use super::bounds::Bounds;
use super::vector::{Numeric, NumericKind, Vector};
use crate::error::{SwarmError, SwarmResult};

const ENTRY_PATTERN: &str =
    r"^([RZB])(?:\(\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*\))?(?:\^(\d+))?$";

/// Largest dimension a parsed domain may have
pub const MAX_DIMENSION: usize = 1 << 20;

fn entry_regex() -> SwarmResult<&'static Regex> {
    static ENTRY_RE: OnceLock<Result<Regex, String>> = OnceLock::new();
    ENTRY_RE
        .get_or_init(|| Regex::new(ENTRY_PATTERN).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| SwarmError::DomainParse(e.clone()))
}

/// Per-dimension value kinds and bounds of a problem
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Domain {
    elements: Vec<Numeric>,
}

impl Domain {
    pub fn new(elements: Vec<Numeric>) -> Self {
        Self { elements }
    }

    /// Real-valued domain with the given bounds per dimension.
    pub fn from_bounds(bounds: impl IntoIterator<Item = Bounds>) -> Self {
        Self {
            elements: bounds
                .into_iter()
                .map(|b| Numeric::bounded(b.lower(), b))
                .collect(),
        }
    }

    pub fn parse(text: &str) -> SwarmResult<Self> {
        let entry_re = entry_regex()?;

        let mut elements = Vec::new();
        for entry in split_top_level(text)? {
            let caps = entry_re
                .captures(entry)
                .ok_or_else(|| SwarmError::DomainParse(format!("unrecognised entry '{}'", entry)))?;

            let kind = match &caps[1] {
                "R" => NumericKind::Real,
                "Z" => NumericKind::Integer,
                _ => NumericKind::Bit,
            };

            let bounds = match (caps.get(2), caps.get(3)) {
                (Some(lo), Some(hi)) => {
                    if kind == NumericKind::Bit {
                        return Err(SwarmError::DomainParse(format!(
                            "bit entry '{}' cannot carry bounds",
                            entry
                        )));
                    }
                    let b = Bounds::new(parse_number(lo.as_str())?, parse_number(hi.as_str())?)?;
                    if kind == NumericKind::Integer && b.lower().ceil() > b.upper().floor() {
                        return Err(SwarmError::DomainParse(format!(
                            "integer entry '{}' holds no integer",
                            entry
                        )));
                    }
                    Some(b)
                }
                _ if kind == NumericKind::Bit => Some(Bounds::new(0.0, 1.0)?),
                _ => None,
            };

            let repeat = match caps.get(4) {
                Some(n) => n
                    .as_str()
                    .parse::<usize>()
                    .map_err(|e| SwarmError::DomainParse(e.to_string()))?,
                None => 1,
            };
            if repeat == 0 {
                return Err(SwarmError::DomainParse(format!("zero repetition in '{}'", entry)));
            }
            if repeat > MAX_DIMENSION - elements.len() {
                return Err(SwarmError::DomainParse(format!(
                    "'{}' exceeds the maximum of {} dimensions",
                    entry, MAX_DIMENSION
                )));
            }

            let initial = match (kind, bounds) {
                (NumericKind::Integer, Some(b)) => b.lower().ceil(),
                (_, Some(b)) => b.lower(),
                (_, None) => 0.0,
            };
            let template = Numeric::with_kind(initial, bounds, kind);
            elements.extend(std::iter::repeat(template).take(repeat));
        }

        Ok(Self { elements })
    }

    pub fn dimension(&self) -> usize {
        self.elements.len()
    }

    pub fn bounds(&self, index: usize) -> SwarmResult<Option<Bounds>> {
        self.elements
            .get(index)
            .map(Numeric::bounds)
            .ok_or(SwarmError::IndexOutOfRange { index, len: self.elements.len() })
    }

    /// A vector of the right shape with every value at its lower bound.
    pub fn template(&self) -> Vector {
        self.elements.iter().copied().collect()
    }

    pub fn contains(&self, candidate: &Vector) -> bool {
        self.validate(candidate).is_ok()
    }

    /// Fails with a domain error on a dimension mismatch or on any value
    /// outside its bounds.
    pub fn validate(&self, candidate: &Vector) -> SwarmResult<()> {
        if candidate.dimension() != self.dimension() {
            return Err(SwarmError::Domain(format!(
                "expected {} dimensions, got {}",
                self.dimension(),
                candidate.dimension()
            )));
        }

        for (index, (numeric, element)) in candidate.iter().zip(&self.elements).enumerate() {
            if let Some(b) = element.bounds() {
                if !b.contains(numeric.value()) {
                    return Err(SwarmError::Domain(format!(
                        "value {} at dimension {} outside [{}, {}]",
                        numeric.value(),
                        index,
                        b.lower(),
                        b.upper()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Uniformly sample a feasible vector. Every dimension must be bounded.
    pub fn random_vector(&self, rng: &mut dyn RngCore) -> SwarmResult<Vector> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let b = element.bounds().ok_or_else(|| {
                    SwarmError::Domain(format!("dimension {} is unbounded", index))
                })?;
                let value = match element.kind() {
                    NumericKind::Real => b.lower() + rng.gen::<f64>() * b.width(),
                    NumericKind::Integer => {
                        let lo = b.lower().ceil() as i64;
                        let hi = b.upper().floor() as i64;
                        if lo > hi {
                            return Err(SwarmError::Domain(format!(
                                "dimension {} holds no integer",
                                index
                            )));
                        }
                        rng.gen_range(lo..=hi) as f64
                    }
                    NumericKind::Bit => {
                        if rng.gen_bool(0.5) {
                            1.0
                        } else {
                            0.0
                        }
                    }
                };
                Ok(Numeric::with_kind(value, Some(b), element.kind()))
            })
            .collect::<SwarmResult<Vec<_>>>()
            .map(Vector::new)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match (element.kind(), element.bounds()) {
                (NumericKind::Bit, _) => write!(f, "B")?,
                (kind, Some(b)) => {
                    let tag = if kind == NumericKind::Integer { "Z" } else { "R" };
                    write!(f, "{}({}, {})", tag, b.lower(), b.upper())?
                }
                (NumericKind::Integer, None) => write!(f, "Z")?,
                (NumericKind::Real, None) => write!(f, "R")?,
            }
        }
        Ok(())
    }
}

fn parse_number(text: &str) -> SwarmResult<f64> {
    text.parse::<f64>()
        .map_err(|_| SwarmError::DomainParse(format!("'{}' is not a number", text)))
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(text: &str) -> SwarmResult<Vec<&str>> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    SwarmError::DomainParse("unbalanced parentheses".to_string())
                })?
            }
            ',' if depth == 0 => {
                entries.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(SwarmError::DomainParse("unbalanced parentheses".to_string()));
    }
    entries.push(text[start..].trim());

    if entries.iter().any(|e| e.is_empty()) {
        return Err(SwarmError::DomainParse(format!("empty entry in '{}'", text)));
    }
    Ok(entries)
}
