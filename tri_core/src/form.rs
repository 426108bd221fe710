//! # Triangle Form
//!
//! Wires a host's input fields to the calculation and a display region.
//!
//! A [`TriangleForm`] is built once by [`TriangleForm::bind`], which refuses
//! to wire anything if the host is missing a side field. Each call to
//! [`TriangleForm::submit`] then runs one complete request:
//!
//! ```text
//! Idle -> Collecting -> Rejected(reason)
//!                    -> Validated -> Measured -> Presented
//! ```
//!
//! Rejected and Presented are terminal. Nothing carries over between
//! submissions; the next call starts again from Idle.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use tri_core::form::{Submission, TriangleForm};
//! use tri_core::presenter::Message;
//! use tri_core::settings::DisplaySettings;
//!
//! let fields: HashMap<String, String> = [("side1", "3"), ("side2", "4"), ("side3", "5")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//!
//! let form = TriangleForm::bind(fields, DisplaySettings::default()).unwrap();
//! let mut display: Vec<Message> = Vec::new();
//!
//! let submission = form.submit(&mut display);
//! assert!(matches!(submission, Submission::Presented(_)));
//! assert_eq!(display.len(), 4);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::{self, TriangleReport, ValidationOutcome};
use crate::errors::{TriResult, TriangleError};
use crate::input::{collect_sides, InputSource, SIDE_FIELDS};
use crate::presenter::{present, DisplaySink};
use crate::settings::DisplaySettings;

/// Stage of a request, as reported in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestState {
    Idle,
    Collecting,
    Validated,
    Measured,
    Rejected,
    Presented,
}

/// Terminal outcome of one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "outcome")]
pub enum Submission {
    /// Input or triangle rejected; one error record was shown
    Rejected(TriangleError),
    /// Triangle constructible; info records were shown
    Presented(TriangleReport),
}

impl Submission {
    /// The terminal [`RequestState`] for this outcome
    pub fn state(&self) -> RequestState {
        match self {
            Submission::Rejected(_) => RequestState::Rejected,
            Submission::Presented(_) => RequestState::Presented,
        }
    }

    pub fn report(&self) -> Option<&TriangleReport> {
        match self {
            Submission::Presented(report) => Some(report),
            Submission::Rejected(_) => None,
        }
    }

    pub fn error(&self) -> Option<&TriangleError> {
        match self {
            Submission::Rejected(error) => Some(error),
            Submission::Presented(_) => None,
        }
    }
}

impl From<TriResult<TriangleReport>> for Submission {
    fn from(outcome: TriResult<TriangleReport>) -> Self {
        match outcome {
            Ok(report) => Submission::Presented(report),
            Err(error) => Submission::Rejected(error),
        }
    }
}

/// A host's side fields bound to the calculation.
#[derive(Debug, Clone)]
pub struct TriangleForm<S> {
    source: S,
    settings: DisplaySettings,
}

impl<S: InputSource> TriangleForm<S> {
    /// Bind a host's input fields.
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::MissingInput`] naming the first side field the
    /// host does not expose. No form is created in that case.
    pub fn bind(source: S, settings: DisplaySettings) -> TriResult<Self> {
        if let Some(field) = SIDE_FIELDS.iter().find(|f| !source.has_field(f)) {
            warn!(field, "required input field missing, form not bound");
            return Err(TriangleError::missing_input(*field));
        }

        debug!(locale = %settings.locale, "form bound");
        Ok(TriangleForm { source, settings })
    }

    /// Collect and validate the current field values without presenting.
    pub fn validate(&self) -> ValidationOutcome {
        collect_sides(&self.source).and_then(calculations::triangle::validate)
    }

    /// Run one request and render it into `sink`.
    ///
    /// The sink is cleared first, then receives either one error record or
    /// the four info records of a constructible triangle.
    pub fn submit<D: DisplaySink + ?Sized>(&self, sink: &mut D) -> Submission {
        debug!(state = ?RequestState::Idle, "submission received, clearing display");
        sink.clear();
        debug!(state = ?RequestState::Collecting, "submission started");

        let outcome = self.validate().and_then(|sides| {
            debug!(state = ?RequestState::Validated, %sides, "sides validated");
            calculations::calculate(sides)
                .inspect(|_| debug!(state = ?RequestState::Measured, "triangle classified and measured"))
        });

        for message in present(&outcome, &self.settings) {
            sink.show(message);
        }

        let submission = Submission::from(outcome);
        match &submission {
            Submission::Rejected(error) => {
                debug!(state = ?RequestState::Rejected, code = error.error_code(), "submission rejected")
            }
            Submission::Presented(report) => {
                debug!(state = ?RequestState::Presented, area = report.area, "submission presented")
            }
        }
        submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::TriangleType;
    use crate::presenter::{Message, MessageClass};
    use crate::settings::Locale;
    use std::collections::BTreeMap;

    fn fields(values: &[(&str, &str)]) -> BTreeMap<String, String> {
        values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn bind(values: &[(&str, &str)]) -> TriangleForm<BTreeMap<String, String>> {
        TriangleForm::bind(fields(values), DisplaySettings::default()).unwrap()
    }

    #[test]
    fn test_bind_requires_every_field() {
        let err = TriangleForm::bind(
            fields(&[("side1", "3"), ("side2", "4")]),
            DisplaySettings::default(),
        )
        .unwrap_err();
        assert_eq!(err, TriangleError::missing_input("side3"));
    }

    #[test]
    fn test_bind_accepts_blank_fields() {
        assert!(TriangleForm::bind(
            fields(&[("side1", ""), ("side2", ""), ("side3", "")]),
            DisplaySettings::default(),
        )
        .is_ok());
    }

    #[test]
    fn test_submit_right_triangle() {
        let form = bind(&[("side1", "3"), ("side2", "4"), ("side3", "5")]);
        let mut display: Vec<Message> = Vec::new();

        let submission = form.submit(&mut display);

        let report = submission.report().unwrap();
        assert_eq!(report.triangle_type, TriangleType::Right);
        assert_eq!(format!("{:.2}", report.area), "6.00");
        assert_eq!(submission.state(), RequestState::Presented);
        assert_eq!(display.len(), 4);
        assert_eq!(display[3].to_string(), "Area: 6.00u²");
    }

    #[test]
    fn test_submit_impossible_triangle() {
        let form = bind(&[("side1", "5"), ("side2", "1"), ("side3", "1")]);
        let mut display: Vec<Message> = Vec::new();

        let submission = form.submit(&mut display);

        assert_eq!(submission.error().unwrap().error_code(), "INEQUALITY_VIOLATED");
        assert_eq!(display.len(), 1);
        assert_eq!(display[0].class, MessageClass::Error);
        assert_eq!(
            display[0].to_string(),
            "Triangle impossible to construct from sides 1, 1, 5!"
        );
    }

    #[test]
    fn test_submit_non_numeric_skips_calculation() {
        let form = bind(&[("side1", "3"), ("side2", "abc"), ("side3", "5")]);
        let mut display: Vec<Message> = Vec::new();

        let submission = form.submit(&mut display);

        assert!(submission.report().is_none());
        assert_eq!(display, vec![Message::error("One or more sides are not numbers!")]);
    }

    #[test]
    fn test_submit_empty_value() {
        let form = bind(&[("side1", "3"), ("side2", "4"), ("side3", "  ")]);
        let mut display: Vec<Message> = Vec::new();

        let submission = form.submit(&mut display);

        assert_eq!(submission, Submission::Rejected(TriangleError::empty_value("side3")));
        assert_eq!(display.len(), 1);
    }

    #[test]
    fn test_submit_clears_previous_display() {
        let form = bind(&[("side1", "2"), ("side2", "2"), ("side3", "2")]);
        let mut display = vec![Message::error("left over"), Message::info("old")];

        form.submit(&mut display);
        form.submit(&mut display);

        assert_eq!(display.len(), 4);
        assert!(display.iter().all(|m| !m.is_error()));
    }

    #[test]
    fn test_validate_only() {
        let form = bind(&[("side1", "2.5"), ("side2", "1"), ("side3", "2")]);
        assert_eq!(form.validate().unwrap().as_array(), [1.0, 2.0, 2.5]);
    }

    #[test]
    fn test_polish_form() {
        let form = TriangleForm::bind(
            fields(&[("side1", "1"), ("side2", "2"), ("side3", "2.5")]),
            DisplaySettings::with_locale(Locale::Polish),
        )
        .unwrap();
        let mut display: Vec<Message> = Vec::new();
        form.submit(&mut display);
        assert_eq!(display[1].to_string(), "Jest to trójkąt rozwartokątny");
    }

    #[test]
    fn test_submission_serialization() {
        let form = bind(&[("side1", "1"), ("side2", "1"), ("side3", "5")]);
        let json = serde_json::to_string(&form.submit(&mut Vec::<Message>::new())).unwrap();
        assert!(json.contains("\"state\":\"Rejected\""));
        assert!(json.contains("InequalityViolated"));
    }
}
