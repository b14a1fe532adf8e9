//! The [`Style`] record and its transcoding operations.

use super::builder::StyleBuilder;
use super::error::StyleError;
use super::range::RangeMapping;
use super::transcode::{self, Direction};

/// A named, immutable table of range mappings.
///
/// Mappings are searched in declaration order and the first one containing
/// a character wins. Characters no mapping covers (punctuation, whitespace,
/// other scripts, digits for styles without a digit block) pass through
/// unchanged in both directions, so every operation preserves the number of
/// scalar values.
///
/// # Example
///
/// ```rust
/// use unistyle::Style;
///
/// let sans_bold = Style::builder("sans-bold")
///     .range('A', 'Z', '\u{1D5D4}')
///     .range('a', 'z', '\u{1D5EE}')
///     .build()
///     .unwrap();
///
/// let loud = sans_bold.encode("Hi!");
/// assert_eq!(loud, "\u{1D5DB}\u{1D5F6}!");
/// assert_eq!(sans_bold.decode(&loud), "Hi!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub(crate) name: String,
    pub(crate) mappings: Vec<RangeMapping>,
}

impl Style {
    /// Starts building a style named `name`.
    pub fn builder(name: impl Into<String>) -> StyleBuilder {
        StyleBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mappings(&self) -> &[RangeMapping] {
        &self.mappings
    }

    /// Applies the style to every character it covers.
    pub fn encode(&self, text: &str) -> String {
        transcode::convert_str(&self.mappings, text, Direction::Encode)
    }

    /// Removes the style, turning styled characters back into plain ones.
    pub fn decode(&self, text: &str) -> String {
        transcode::convert_str(&self.mappings, text, Direction::Decode)
    }

    pub fn encode_char(&self, c: char) -> char {
        transcode::convert_char(&self.mappings, c, Direction::Encode)
    }

    pub fn decode_char(&self, c: char) -> char {
        transcode::convert_char(&self.mappings, c, Direction::Decode)
    }

    /// Returns `true` if encoding would change `text`.
    ///
    /// Conversion is one character to one character, so this holds exactly
    /// when `encode(text) != text`, without building the output.
    pub fn can_encode(&self, text: &str) -> bool {
        text.chars().any(|c| self.encode_char(c) != c)
    }

    /// Returns `true` if decoding would change `text`.
    pub fn is_encoded(&self, text: &str) -> bool {
        text.chars().any(|c| self.decode_char(c) != c)
    }

    /// Encodes UTF-16 code units, rejecting unpaired surrogates.
    pub fn encode_utf16(&self, units: &[u16]) -> Result<Vec<u16>, StyleError> {
        transcode::convert_utf16(&self.mappings, units, Direction::Encode)
    }

    /// Decodes UTF-16 code units, rejecting unpaired surrogates.
    pub fn decode_utf16(&self, units: &[u16]) -> Result<Vec<u16>, StyleError> {
        transcode::convert_utf16(&self.mappings, units, Direction::Decode)
    }

    /// Encodes raw bytes, rejecting anything that is not UTF-8.
    pub fn encode_utf8(&self, bytes: &[u8]) -> Result<String, StyleError> {
        transcode::convert_utf8(&self.mappings, bytes, Direction::Encode)
    }

    /// Decodes raw bytes, rejecting anything that is not UTF-8.
    pub fn decode_utf8(&self, bytes: &[u8]) -> Result<String, StyleError> {
        transcode::convert_utf8(&self.mappings, bytes, Direction::Decode)
    }
}
