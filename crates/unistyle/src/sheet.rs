//! User-defined styles loaded from YAML.
//!
//! A style sheet declares extra styles with the same building blocks the
//! built-in catalog uses, plus aliases:
//!
//! ```yaml
//! styles:
//!   - name: circled
//!     ranges:
//!       - { first: "A", last: "Z", styled: "Ⓐ" }
//!       - { first: "a", last: "z", styled: "ⓐ" }
//!       - { first: "1", last: "9", styled: "①" }
//!       - { first: "0", last: "0", styled: "⓪" }
//!   - name: gothic
//!     ranges:
//!       - { first: "A", last: "Z", styled: "𝔄" }
//!     holes:
//!       - { plain: "C", styled: "ℭ" }
//! aliases:
//!   bubble: circled
//! ```
//!
//! Characters must be quoted: YAML reads a bare `0` as a number. A hole must
//! fall inside one of its style's ranges, exactly as with
//! [`StyleBuilder::hole`](crate::StyleBuilder::hole).
//!
//! Aliases are applied after all styles of the sheet, in name order, and
//! must point at a style (or an alias registered earlier).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::style::{Style, StyleError};

/// A parsed style sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSheet {
    #[serde(default)]
    pub styles: Vec<StyleDefinition>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// One style as declared in a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleDefinition {
    pub name: String,
    #[serde(default)]
    pub ranges: Vec<RangeDefinition>,
    #[serde(default)]
    pub holes: Vec<HoleDefinition>,
}

/// `first..=last` shifted onto the block starting at `styled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeDefinition {
    pub first: char,
    pub last: char,
    pub styled: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoleDefinition {
    pub plain: char,
    pub styled: char,
}

impl StyleSheet {
    /// Parses a sheet from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleError> {
        serde_yaml::from_str(yaml).map_err(|e| StyleError::InvalidStyleSheet {
            message: e.to_string(),
        })
    }

    /// Reads and parses a sheet file.
    pub fn from_path(path: &Path) -> Result<Self, StyleError> {
        let yaml = std::fs::read_to_string(path).map_err(|e| StyleError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&yaml)
    }
}

impl StyleDefinition {
    /// Builds the style, applying the same validation as
    /// [`StyleBuilder::build`](crate::StyleBuilder::build).
    pub fn to_style(&self) -> Result<Style, StyleError> {
        let mut builder = Style::builder(self.name.clone());
        for range in &self.ranges {
            builder = builder.range(range.first, range.last, range.styled);
        }
        for hole in &self.holes {
            builder = builder.hole(hole.plain, hole.styled);
        }
        builder.build()
    }
}
