//! Request parameters accepted by the Images API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Largest number of images a single request may ask for.
pub const MAX_COUNT: u32 = 10;

/// Output resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageSize {
    /// Square, 1024x1024.
    #[default]
    #[serde(rename = "1024x1024")]
    Square,
    /// Landscape, 1792x1024.
    #[serde(rename = "1792x1024")]
    Landscape,
    /// Portrait, 1024x1792.
    #[serde(rename = "1024x1792")]
    Portrait,
}

impl ImageSize {
    /// Wire representation (e.g. `"1024x1024"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1024x1024",
            Self::Landscape => "1792x1024",
            Self::Portrait => "1024x1792",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1024x1024" => Ok(Self::Square),
            "1792x1024" => Ok(Self::Landscape),
            "1024x1792" => Ok(Self::Portrait),
            _ => Err(format!(
                "Unsupported size '{s}'. Valid: 1024x1024, 1792x1024, 1024x1792"
            )),
        }
    }
}

/// Rendering quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    /// Default quality.
    #[default]
    Standard,
    /// Finer detail, slower and more expensive.
    Hd,
}

impl ImageQuality {
    /// Wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Hd => "hd",
        }
    }
}

impl fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "hd" => Ok(Self::Hd),
            _ => Err(format!("Unsupported quality '{s}'. Valid: standard, hd")),
        }
    }
}

/// Validate the number of images requested.
///
/// # Errors
///
/// Returns an error if the count is outside `1..=10`.
pub fn validate_count(count: u32) -> Result<(), String> {
    if (1..=MAX_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(format!("Unsupported count {count}. Valid: 1-{MAX_COUNT}"))
    }
}

/// Validate the prompt text.
///
/// # Errors
///
/// Returns an error if the prompt is empty or only whitespace.
pub fn validate_prompt(prompt: &str) -> Result<(), String> {
    if prompt.trim().is_empty() {
        Err("Prompt must not be empty".to_string())
    } else {
        Ok(())
    }
}
