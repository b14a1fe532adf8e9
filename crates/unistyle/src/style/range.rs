//! Code-point ranges and the offset mappings between them.

use super::error::StyleError;
use super::transcode::Direction;

const SURROGATE_FIRST: u32 = 0xD800;
const SURROGATE_LAST: u32 = 0xDFFF;

/// An inclusive block of Unicode scalar values, e.g. `'A'..='Z'`.
///
/// A range never spans the surrogate gap, so every value between `start`
/// and `end` is a valid `char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodePointRange {
    start: u32,
    end: u32,
}

#[allow(clippy::len_without_is_empty)]
impl CodePointRange {
    /// Creates the range `first..=last`.
    ///
    /// Fails with [`StyleError::InvalidRange`] when `last < first` or when the
    /// range would include surrogate code points.
    pub fn new(first: char, last: char) -> Result<Self, StyleError> {
        let (start, end) = (first as u32, last as u32);
        if end < start || (start < SURROGATE_FIRST && end > SURROGATE_LAST) {
            return Err(StyleError::InvalidRange { first, last });
        }
        Ok(Self { start, end })
    }

    /// Creates a range holding a single character.
    pub fn single(c: char) -> Self {
        Self {
            start: c as u32,
            end: c as u32,
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of scalar values in the range (never zero).
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&(c as u32))
    }

    pub fn overlaps(&self, other: &CodePointRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// A plain range paired with the styled range it shifts onto.
///
/// Both sides always have the same length, so converting is a pure offset
/// from one start to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeMapping {
    plain: CodePointRange,
    styled: CodePointRange,
}

impl RangeMapping {
    /// Maps `plain_first..=plain_last` onto the equally long block starting
    /// at `styled_first`.
    ///
    /// Fails with [`StyleError::InvalidTarget`] naming the first styled code
    /// point that is not a scalar value: the first surrogate the block runs
    /// into, or the first value past `U+10FFFF`.
    pub fn new(
        plain_first: char,
        plain_last: char,
        styled_first: char,
    ) -> Result<Self, StyleError> {
        let plain = CodePointRange::new(plain_first, plain_last)?;
        let styled_start = styled_first as u32;
        let styled_end = styled_start + (plain.end - plain.start);
        if styled_start < SURROGATE_FIRST && styled_end >= SURROGATE_FIRST {
            return Err(StyleError::InvalidTarget {
                code_point: SURROGATE_FIRST,
            });
        }
        if styled_end > char::MAX as u32 {
            return Err(StyleError::InvalidTarget {
                code_point: char::MAX as u32 + 1,
            });
        }
        Ok(Self {
            plain,
            styled: CodePointRange {
                start: styled_start,
                end: styled_end,
            },
        })
    }

    /// Maps one plain character to one styled character.
    pub fn single(plain: char, styled: char) -> Self {
        Self {
            plain: CodePointRange::single(plain),
            styled: CodePointRange::single(styled),
        }
    }

    pub fn plain(&self) -> CodePointRange {
        self.plain
    }

    pub fn styled(&self) -> CodePointRange {
        self.styled
    }

    /// Shifts `c` across the mapping, or returns `None` when the source side
    /// of `direction` does not contain it.
    pub(crate) fn shift(&self, c: char, direction: Direction) -> Option<char> {
        let (from, to) = match direction {
            Direction::Encode => (&self.plain, &self.styled),
            Direction::Decode => (&self.styled, &self.plain),
        };
        if !from.contains(c) {
            return None;
        }
        char::from_u32(to.start + (c as u32 - from.start))
    }
}
