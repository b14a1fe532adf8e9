//! The range-remapping engine shared by every style.
//!
//! Conversion works on whole scalar values: styled letterforms live outside
//! the Basic Multilingual Plane, so they take four UTF-8 bytes or a UTF-16
//! surrogate pair. Raw inputs are decoded to `char`s first and rejected
//! wholesale when malformed.

use super::error::StyleError;
use super::range::RangeMapping;

/// Which side of each mapping is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// plain -> styled
    Encode,
    /// styled -> plain
    Decode,
}

/// Converts one character. The first mapping containing `c` wins; characters
/// outside every mapping pass through.
pub(crate) fn convert_char(mappings: &[RangeMapping], c: char, direction: Direction) -> char {
    mappings
        .iter()
        .find_map(|mapping| mapping.shift(c, direction))
        .unwrap_or(c)
}

pub(crate) fn convert_str(mappings: &[RangeMapping], text: &str, direction: Direction) -> String {
    let mut out = String::with_capacity(text.len());
    out.extend(text.chars().map(|c| convert_char(mappings, c, direction)));
    out
}

pub(crate) fn convert_utf16(
    mappings: &[RangeMapping],
    units: &[u16],
    direction: Direction,
) -> Result<Vec<u16>, StyleError> {
    let chars = decode_utf16_units(units)?;
    let mut out = Vec::with_capacity(units.len());
    let mut buf = [0u16; 2];
    for c in chars {
        out.extend_from_slice(convert_char(mappings, c, direction).encode_utf16(&mut buf));
    }
    Ok(out)
}

pub(crate) fn convert_utf8(
    mappings: &[RangeMapping],
    bytes: &[u8],
    direction: Direction,
) -> Result<String, StyleError> {
    let text = std::str::from_utf8(bytes).map_err(|e| StyleError::MalformedInput {
        position: e.valid_up_to(),
    })?;
    Ok(convert_str(mappings, text, direction))
}

fn decode_utf16_units(units: &[u16]) -> Result<Vec<char>, StyleError> {
    let mut chars = Vec::with_capacity(units.len());
    let mut position = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                position += c.len_utf16();
                chars.push(c);
            }
            Err(_) => return Err(StyleError::MalformedInput { position }),
        }
    }
    Ok(chars)
}
