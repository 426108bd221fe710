//! # Triangle Calculation
//!
//! Validates, classifies and measures a triangle given its three sides.
//!
//! ## Assumptions
//!
//! - Sides arrive as a sorted [`SideTriple`], so `c` is the longest side
//! - Strict triangle inequality: degenerate triangles (`c == a + b`) are rejected
//! - Right triangles are detected by exact floating-point equality, so
//!   rounded inputs such as `1, 1, 1.4142` classify as Acute or Obtuse
//!
//! ## Example
//!
//! ```rust
//! use tri_core::calculations::triangle::{calculate, TriangleType};
//! use tri_core::sides::SideTriple;
//!
//! let report = calculate(SideTriple::new(3.0, 4.0, 5.0)).unwrap();
//! assert_eq!(report.triangle_type, TriangleType::Right);
//! assert_eq!(format!("{:.2}", report.area), "6.00");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TriResult, TriangleError};
use crate::sides::SideTriple;

/// Angle classification of a valid triangle, by its largest angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriangleType {
    /// All angles below 90°
    Acute,
    /// One angle of exactly 90°
    Right,
    /// One angle above 90°
    Obtuse,
}

impl TriangleType {
    /// All variants in display order
    pub const ALL: [TriangleType; 3] = [TriangleType::Acute, TriangleType::Right, TriangleType::Obtuse];
}

/// Resolved outcome of a valid triangle.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sides": [3.0, 4.0, 5.0],
///   "triangle_type": "Right",
///   "area": 6.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleReport {
    /// Sorted sides
    pub sides: SideTriple,

    /// Angle classification
    pub triangle_type: TriangleType,

    /// Area by Heron's formula
    pub area: f64,
}

/// Strict triangle inequality for sides sorted ascending.
///
/// Callers must pass `a ≤ b ≤ c`; with unsorted values the result is
/// meaningless. Prefer [`validate`] with a [`SideTriple`].
pub fn is_valid(a: f64, b: f64, c: f64) -> bool {
    c < a + b
}

/// Check that `sides` form a constructible triangle.
///
/// Zero or negative sides always fail here: with `a ≤ 0` the sum `a + b`
/// cannot exceed `c`.
pub fn validate(sides: SideTriple) -> TriResult<SideTriple> {
    if sides.is_valid() {
        Ok(sides)
    } else {
        Err(TriangleError::inequality_violated(sides))
    }
}

/// Classify sorted, valid sides by comparing `a² + b²` with `c²`.
pub fn classify(a: f64, b: f64, c: f64) -> TriangleType {
    let legs = a * a + b * b;
    let hypotenuse = c * c;

    if legs == hypotenuse {
        TriangleType::Right
    } else if legs < hypotenuse {
        TriangleType::Obtuse
    } else {
        TriangleType::Acute
    }
}

/// Area by Heron's formula.
///
/// Only defined for valid sides; invalid input can produce NaN.
pub fn area(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Validate, classify and measure a triangle.
///
/// # Returns
///
/// * `Ok(TriangleReport)` - The triangle is constructible
/// * `Err(TriangleError::InequalityViolated)` - It is not
pub fn calculate(sides: SideTriple) -> TriResult<TriangleReport> {
    let sides = validate(sides)?;
    let (a, b, c) = (sides.a(), sides.b(), sides.c());

    let report = TriangleReport {
        sides,
        triangle_type: classify(a, b, c),
        area: area(a, b, c),
    };
    debug!(triangle_type = ?report.triangle_type, area = report.area, "triangle measured");
    Ok(report)
}
