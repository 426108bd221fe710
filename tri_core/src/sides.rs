//! # Side Triples
//!
//! A [`SideTriple`] holds three side lengths sorted ascending, so `c` is
//! always the longest side. The validator, classifier and area formula all
//! read `a`, `b`, `c` from it and never have to re-sort.
//!
//! ## Example
//!
//! ```rust
//! use tri_core::sides::SideTriple;
//!
//! let sides = SideTriple::new(5.0, 3.0, 4.0);
//! assert_eq!(sides.as_array(), [3.0, 4.0, 5.0]);
//! assert_eq!(sides.to_string(), "3, 4, 5");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Three side lengths, sorted ascending (a ≤ b ≤ c).
///
/// Serializes as a plain JSON array. Deserializing sorts, so the ordering
/// holds for values read back from JSON too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct SideTriple([f64; 3]);

impl SideTriple {
    /// Build a triple from three lengths in any order.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_array([x, y, z])
    }

    /// Build a triple from an array in any order.
    ///
    /// The sort is stable, and sorting an already sorted triple is a no-op.
    pub fn from_array(mut values: [f64; 3]) -> Self {
        values.sort_by(f64::total_cmp);
        SideTriple(values)
    }

    /// Shortest side
    pub fn a(&self) -> f64 {
        self.0[0]
    }

    /// Middle side
    pub fn b(&self) -> f64 {
        self.0[1]
    }

    /// Longest side
    pub fn c(&self) -> f64 {
        self.0[2]
    }

    /// Sides as a sorted array
    pub fn as_array(&self) -> [f64; 3] {
        self.0
    }

    /// Strict triangle inequality on the sorted sides
    pub fn is_valid(&self) -> bool {
        crate::calculations::triangle::is_valid(self.a(), self.b(), self.c())
    }
}

impl From<[f64; 3]> for SideTriple {
    fn from(values: [f64; 3]) -> Self {
        SideTriple::from_array(values)
    }
}

impl From<SideTriple> for [f64; 3] {
    fn from(sides: SideTriple) -> Self {
        sides.0
    }
}

impl fmt::Display for SideTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_length(f, self.a())?;
        f.write_str(", ")?;
        write_length(f, self.b())?;
        f.write_str(", ")?;
        write_length(f, self.c())
    }
}

/// Positional notation between 1e-6 and 1e21, exponent notation outside
/// (`1e+200`, `2.5e-7`).
fn write_length(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let magnitude = value.abs();
    if magnitude == 0.0 || !magnitude.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", value);
    }

    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&text),
    }
}
