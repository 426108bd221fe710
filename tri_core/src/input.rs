//! # Input Collection
//!
//! Reads the three side fields from a host-supplied [`InputSource`] and turns
//! them into a sorted [`SideTriple`].
//!
//! Fields are named `side1`, `side2`, `side3`. Collection stops at the first
//! field that is absent, blank, or not a finite number; there are no partial
//! results.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use tri_core::input::collect_sides;
//!
//! let mut fields = HashMap::new();
//! fields.insert("side1".to_string(), " 5 ".to_string());
//! fields.insert("side2".to_string(), "3".to_string());
//! fields.insert("side3".to_string(), "4".to_string());
//!
//! let sides = collect_sides(&fields).unwrap();
//! assert_eq!(sides.as_array(), [3.0, 4.0, 5.0]);
//! ```

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::errors::{TriResult, TriangleError};
use crate::sides::SideTriple;

/// Names of the side fields, in collection order.
pub const SIDE_FIELDS: [&str; 3] = ["side1", "side2", "side3"];

/// A host that can supply the raw text of named input fields.
///
/// Returning `None` means the field does not exist in the host at all, which
/// is different from a field that exists but holds blank text.
pub trait InputSource {
    /// Current text of `field`, or `None` if the host has no such field.
    fn value(&self, field: &str) -> Option<String>;

    /// Whether the host exposes `field`.
    fn has_field(&self, field: &str) -> bool {
        self.value(field).is_some()
    }
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn value(&self, field: &str) -> Option<String> {
        (**self).value(field)
    }

    fn has_field(&self, field: &str) -> bool {
        (**self).has_field(field)
    }
}

impl InputSource for HashMap<String, String> {
    fn value(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }

    fn has_field(&self, field: &str) -> bool {
        self.contains_key(field)
    }
}

impl InputSource for BTreeMap<String, String> {
    fn value(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }

    fn has_field(&self, field: &str) -> bool {
        self.contains_key(field)
    }
}

/// Parse the raw text of a single side field.
///
/// Surrounding whitespace is trimmed. Besides decimal and exponent forms,
/// unsigned `0x`, `0b` and `0o` integer literals are accepted. Infinity and
/// NaN spellings parse as floats but are rejected as non-numeric.
pub fn parse_side(field: &str, raw: &str) -> TriResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TriangleError::empty_value(field));
    }

    let parsed = match radix_literal(trimmed) {
        Some(value) => Some(value),
        None => trimmed.parse::<f64>().ok(),
    };

    match parsed {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(TriangleError::non_numeric(field, trimmed)),
    }
}

/// Value of an unsigned `0x`/`0b`/`0o` literal, `None` for anything else.
fn radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Collect all three sides from `source`, sorted ascending.
///
/// # Returns
///
/// * `Ok(SideTriple)` - All three fields parsed
/// * `Err(TriangleError)` - The first field that is missing, empty, or non-numeric
pub fn collect_sides<S: InputSource + ?Sized>(source: &S) -> TriResult<SideTriple> {
    let mut values = [0.0; 3];
    for (slot, field) in values.iter_mut().zip(SIDE_FIELDS) {
        let raw = source
            .value(field)
            .ok_or_else(|| TriangleError::missing_input(field))?;
        *slot = parse_side(field, &raw)?;
    }

    let sides = SideTriple::from_array(values);
    debug!(%sides, "collected sides");
    Ok(sides)
}
