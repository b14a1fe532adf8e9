//! Style and transcoding errors.

use std::path::PathBuf;

/// Error returned by style construction, registry lookups and transcoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// No style or alias is registered under this name
    UnknownStyle {
        name: String,
        available: Vec<String>,
    },
    /// A style or alias with this name is already registered
    DuplicateStyle { name: String },
    /// Input is not a valid sequence of Unicode scalar values.
    ///
    /// `position` is the index of the first offending unit (byte for UTF-8,
    /// code unit for UTF-16).
    MalformedInput { position: usize },
    /// A range whose last character precedes its first, or which spans the
    /// surrogate gap
    InvalidRange { first: char, last: char },
    /// Shifting a range lands on something that is not a scalar value
    InvalidTarget { code_point: u32 },
    /// Two mappings of one style claim the same code point
    OverlappingRanges { style: String },
    /// A hole names a character that no declared range covers
    HoleOutsideRange { style: String, plain: char },
    /// A style sheet could not be parsed
    InvalidStyleSheet { message: String },
    /// A style sheet could not be read
    Io { path: PathBuf, message: String },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::UnknownStyle { name, available } => {
                write!(f, "unknown style '{}'", name)?;
                if !available.is_empty() {
                    write!(f, " (available: {})", available.join(", "))?;
                }
                Ok(())
            }
            StyleError::DuplicateStyle { name } => {
                write!(f, "style '{}' is already registered", name)
            }
            StyleError::MalformedInput { position } => {
                write!(f, "malformed Unicode input at position {}", position)
            }
            StyleError::InvalidRange { first, last } => write!(
                f,
                "invalid range U+{:04X}..U+{:04X}",
                *first as u32, *last as u32
            ),
            StyleError::InvalidTarget { code_point } => {
                write!(f, "U+{:04X} is not a Unicode scalar value", code_point)
            }
            StyleError::OverlappingRanges { style } => {
                write!(f, "style '{}' has overlapping ranges", style)
            }
            StyleError::HoleOutsideRange { style, plain } => write!(
                f,
                "style '{}' relocates '{}' but no range covers it",
                style, plain
            ),
            StyleError::InvalidStyleSheet { message } => {
                write!(f, "invalid style sheet: {}", message)
            }
            StyleError::Io { path, message } => {
                write!(f, "cannot read {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for StyleError {}
