//! # tri_core - Triangle Calculation Engine
//!
//! `tri_core` takes three side lengths typed into a host's form, decides
//! whether they make a triangle, classifies it as acute, right or obtuse,
//! and computes its area. Hosts plug in through two traits: an
//! [`InputSource`] that supplies the raw field text and a [`DisplaySink`]
//! that receives the resulting message records.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every submission is computed from scratch
//! - **JSON-First**: results, messages and errors all implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, never panics on user input
//!
//! ## Quick Start
//!
//! ```rust
//! use tri_core::{calculate, SideTriple, TriangleType};
//!
//! let report = calculate(SideTriple::new(2.0, 2.0, 2.0)).unwrap();
//! assert_eq!(report.triangle_type, TriangleType::Acute);
//! ```
//!
//! ## Modules
//!
//! - [`input`] - Reading and parsing the three side fields
//! - [`sides`] - The sorted side triple
//! - [`calculations`] - Validation, classification and area
//! - [`presenter`] - Message records and the display sink
//! - [`form`] - Binding a host and running submissions
//! - [`settings`] - Display settings and settings files
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod form;
pub mod input;
pub mod presenter;
pub mod settings;
pub mod sides;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, TriangleReport, TriangleType, ValidationOutcome};
pub use errors::{TriResult, TriangleError};
pub use form::{RequestState, Submission, TriangleForm};
pub use input::{collect_sides, InputSource};
pub use presenter::{DisplaySink, Message, MessageClass, MessageContent};
pub use settings::{load_settings, DisplaySettings, Locale};
pub use sides::SideTriple;
