//! # Triangle Calculations
//!
//! The calculation follows the same pattern as any pure calculation here:
//!
//! - a sorted [`SideTriple`](crate::sides::SideTriple) as input
//! - a [`TriangleReport`] as the result (JSON-serializable)
//! - `calculate(sides) -> Result<TriangleReport, TriangleError>`
//!
//! The individual steps ([`triangle::is_valid`], [`triangle::classify`],
//! [`triangle::area`]) are public for callers that need only one of them.

pub mod triangle;

use crate::errors::TriResult;
use crate::sides::SideTriple;

// Re-export commonly used types
pub use triangle::{calculate, TriangleReport, TriangleType};

/// Outcome of validating a set of sides: `Ok` carries the sorted triple,
/// `Err` carries the reason it was rejected.
pub type ValidationOutcome = TriResult<SideTriple>;
