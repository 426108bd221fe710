//! # Result Presenter
//!
//! Turns the outcome of one submission into the message records a host
//! renders: a single error record on rejection, or four info records
//! (construction message, classification, image, area) on success.
//!
//! The presenter never renders anything itself. Hosts receive [`Message`]
//! values through a [`DisplaySink`].
//!
//! ## Example
//!
//! ```rust
//! use tri_core::calculations::calculate;
//! use tri_core::presenter::{present, MessageClass};
//! use tri_core::settings::DisplaySettings;
//! use tri_core::sides::SideTriple;
//!
//! let outcome = calculate(SideTriple::new(3.0, 4.0, 5.0));
//! let messages = present(&outcome, &DisplaySettings::default());
//!
//! assert_eq!(messages.len(), 4);
//! assert!(messages.iter().all(|m| m.class == MessageClass::Info));
//! assert_eq!(messages[3].to_string(), "Area: 6.00u²");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::{TriangleReport, TriangleType};
use crate::errors::{TriResult, TriangleError};
use crate::settings::{DisplaySettings, Locale};
use crate::sides::SideTriple;

/// Tag of a rendered record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageClass {
    Error,
    Info,
}

/// Payload of a rendered record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageContent {
    /// Human-readable text
    Text(String),
    /// Path of an image asset
    Image(String),
}

/// One renderable record.
///
/// ## JSON Example
///
/// ```json
/// { "class": "info", "content": { "text": "This is a right triangle" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub class: MessageClass,
    pub content: MessageContent,
}

impl Message {
    pub fn error(text: impl Into<String>) -> Self {
        Message {
            class: MessageClass::Error,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Message {
            class: MessageClass::Info,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn image(path: impl Into<String>) -> Self {
        Message {
            class: MessageClass::Info,
            content: MessageContent::Image(path.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.class == MessageClass::Error
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            MessageContent::Text(text) => f.write_str(text),
            MessageContent::Image(path) => write!(f, "[image: {}]", path),
        }
    }
}

/// The host's display region.
///
/// Cleared at the start of every submission, then filled with the
/// presenter's records in order.
pub trait DisplaySink {
    /// Remove every record currently shown
    fn clear(&mut self);

    /// Show one more record after the existing ones
    fn show(&mut self, message: Message);
}

impl DisplaySink for Vec<Message> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn show(&mut self, message: Message) {
        self.push(message);
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn show(&mut self, message: Message) {
        (**self).show(message);
    }
}

/// Localized label for a triangle type
pub fn type_label(triangle_type: TriangleType, locale: Locale) -> &'static str {
    match (locale, triangle_type) {
        (Locale::English, TriangleType::Acute) => "acute",
        (Locale::English, TriangleType::Right) => "right",
        (Locale::English, TriangleType::Obtuse) => "obtuse",
        (Locale::Polish, TriangleType::Acute) => "ostrokątny",
        (Locale::Polish, TriangleType::Right) => "prostokątny",
        (Locale::Polish, TriangleType::Obtuse) => "rozwartokątny",
    }
}

/// Image file name for a triangle type
pub fn type_asset(triangle_type: TriangleType) -> &'static str {
    match triangle_type {
        TriangleType::Acute => "ostrokatny.webp",
        TriangleType::Right => "prostokatny.webp",
        TriangleType::Obtuse => "rozwartokatny.png",
    }
}

/// Map an outcome to the records to display.
pub fn present(outcome: &TriResult<TriangleReport>, settings: &DisplaySettings) -> Vec<Message> {
    match outcome {
        Ok(report) => present_report(report, settings),
        Err(error) => vec![present_error(error, settings.locale)],
    }
}

/// The single error record for a rejected submission.
pub fn present_error(error: &TriangleError, locale: Locale) -> Message {
    match error {
        TriangleError::InequalityViolated { sides } => Message::error(impossible_text(sides, locale)),
        TriangleError::Settings { path, reason } => {
            Message::error(format!("Settings error on '{}': {}", path, reason))
        }
        TriangleError::MissingInput { .. }
        | TriangleError::EmptyValue { .. }
        | TriangleError::NonNumericInput { .. } => Message::error(match locale {
            Locale::English => "One or more sides are not numbers!",
            Locale::Polish => "Jeden lub kilka boków nie jest liczbami!",
        }),
    }
}

/// The four info records for a constructible triangle.
pub fn present_report(report: &TriangleReport, settings: &DisplaySettings) -> Vec<Message> {
    let locale = settings.locale;
    let sides = &report.sides;

    let possible = match locale {
        Locale::English => format!("Triangle possible to construct from sides {}", sides),
        Locale::Polish => format!("Trójkąt jest możliwy do utworzenia z boków {}", sides),
    };

    let label = type_label(report.triangle_type, locale);
    let classification = match (locale, report.triangle_type) {
        (Locale::English, TriangleType::Acute | TriangleType::Obtuse) => {
            format!("This is an {} triangle", label)
        }
        (Locale::English, TriangleType::Right) => format!("This is a {} triangle", label),
        (Locale::Polish, _) => format!("Jest to trójkąt {}", label),
    };

    let image = asset_path(&settings.asset_dir, type_asset(report.triangle_type));

    let area = format!("{:.*}{}", settings.area_precision(), report.area, settings.unit);
    let area = match locale {
        Locale::English => format!("Area: {}", area),
        Locale::Polish => format!("Pole wynosi: {}", area),
    };

    vec![
        Message::info(possible),
        Message::info(classification),
        Message::image(image),
        Message::info(area),
    ]
}

fn impossible_text(sides: &SideTriple, locale: Locale) -> String {
    match locale {
        Locale::English => format!("Triangle impossible to construct from sides {}!", sides),
        Locale::Polish => format!("Trójkąt jest niemożliwy do utworzenia z boków {}!", sides),
    }
}

fn asset_path(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}
