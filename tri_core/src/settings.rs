//! # Display Settings
//!
//! Presentation options for the result messages: language, number of decimal
//! places in the area, the unit marker, and where the triangle images live.
//!
//! Settings files are plain JSON. Every field is optional and falls back to
//! its default, so `{}` is a valid settings file.
//!
//! ```json
//! {
//!   "locale": "pl",
//!   "decimals": 3,
//!   "unit": " cm²",
//!   "asset_dir": "static/img"
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{TriResult, TriangleError};

/// Largest number of decimal places the area is shown with.
///
/// An `f64` carries about 17 significant digits, so more places only print
/// noise.
pub const MAX_DECIMALS: u8 = 17;

/// Language of the presented messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pl")]
    Polish,
}

impl Locale {
    /// Short language code ("en", "pl")
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Polish => "pl",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "pl" | "polish" | "polski" => Ok(Locale::Polish),
            other => Err(format!("unknown locale '{}', expected 'en' or 'pl'", other)),
        }
    }
}

/// Options consumed by the presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Message language
    pub locale: Locale,

    /// Decimal places for the area, at most [`MAX_DECIMALS`]
    pub decimals: u8,

    /// Marker appended to the area value
    pub unit: String,

    /// Directory prefix for the triangle images
    pub asset_dir: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            locale: Locale::default(),
            decimals: 2,
            unit: "u\u{b2}".to_string(),
            asset_dir: "assets".to_string(),
        }
    }
}

impl DisplaySettings {
    /// Settings with the given locale and every other field defaulted.
    pub fn with_locale(locale: Locale) -> Self {
        DisplaySettings {
            locale,
            ..Default::default()
        }
    }

    /// Check field ranges that the JSON types alone do not enforce.
    pub fn validate(&self) -> Result<(), String> {
        if self.decimals > MAX_DECIMALS {
            return Err(format!(
                "decimals must be between 0 and {}, got {}",
                MAX_DECIMALS, self.decimals
            ));
        }
        Ok(())
    }

    /// Decimal places to format the area with, clamped to [`MAX_DECIMALS`].
    pub fn area_precision(&self) -> usize {
        usize::from(self.decimals.min(MAX_DECIMALS))
    }
}

/// Load settings from a JSON file.
///
/// # Errors
///
/// Returns [`TriangleError::Settings`] if the file cannot be read, is not
/// valid settings JSON, or holds an out-of-range value.
pub fn load_settings(path: &Path) -> TriResult<DisplaySettings> {
    let path_str = path.display().to_string();

    let json = fs::read_to_string(path)
        .map_err(|e| TriangleError::settings(&path_str, e.to_string()))?;

    let settings: DisplaySettings = serde_json::from_str(&json)
        .map_err(|e| TriangleError::settings(&path_str, e.to_string()))?;

    settings
        .validate()
        .map_err(|reason| TriangleError::settings(&path_str, reason))?;
    Ok(settings)
}
