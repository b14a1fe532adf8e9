//! Fluent construction of [`Style`] values.

use super::error::StyleError;
use super::range::{CodePointRange, RangeMapping};
use super::style::Style;

#[derive(Debug, Clone, Copy)]
struct Block {
    first: char,
    last: char,
    styled: char,
}

/// Builds a [`Style`] from contiguous blocks and single-character holes.
///
/// A hole relocates one character of a declared block. Unicode encoded some
/// styled letters (script `ℬ`, fraktur `ℭ`, double-struck `ℝ`, ...) in the
/// Letterlike Symbols block long before the Mathematical Alphanumeric block
/// existed, and left reserved gaps at their natural positions. The builder
/// splits each block around its holes, so the finished style is a list of
/// non-overlapping, 1:1 mappings.
///
/// # Example
///
/// ```rust
/// use unistyle::Style;
///
/// let script = Style::builder("script")
///     .range('A', 'Z', '\u{1D49C}')
///     .hole('B', '\u{212C}')
///     .build()
///     .unwrap();
///
/// assert_eq!(script.encode("ABC"), "\u{1D49C}\u{212C}\u{1D49E}");
/// ```
#[derive(Debug, Clone)]
pub struct StyleBuilder {
    name: String,
    blocks: Vec<Block>,
    holes: Vec<(char, char)>,
}

impl StyleBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
            holes: Vec::new(),
        }
    }

    /// Maps `first..=last` onto the block starting at `styled`.
    pub fn range(mut self, first: char, last: char, styled: char) -> Self {
        self.blocks.push(Block {
            first,
            last,
            styled,
        });
        self
    }

    /// Sends `plain` to `styled` instead of its position in the block.
    pub fn hole(mut self, plain: char, styled: char) -> Self {
        self.holes.push((plain, styled));
        self
    }

    /// Validates the declarations and produces the style.
    pub fn build(self) -> Result<Style, StyleError> {
        let mut mappings = Vec::new();
        let mut placed = vec![false; self.holes.len()];

        for block in &self.blocks {
            let plain = CodePointRange::new(block.first, block.last)?;

            let mut holes: Vec<(usize, char, char)> = self
                .holes
                .iter()
                .enumerate()
                .filter(|(i, (c, _))| !placed[*i] && plain.contains(*c))
                .map(|(i, &(c, styled))| (i, c, styled))
                .collect();
            holes.sort_by_key(|&(_, c, _)| c);

            let mut cursor = plain.start();
            for (i, c, styled) in holes {
                placed[i] = true;
                let at = c as u32;
                if cursor < at {
                    mappings.push(segment(block, cursor, at - 1)?);
                }
                mappings.push(RangeMapping::single(c, styled));
                cursor = at + 1;
            }
            if cursor <= plain.end() {
                mappings.push(segment(block, cursor, plain.end())?);
            }
        }

        if let Some(i) = placed.iter().position(|done| !done) {
            return Err(StyleError::HoleOutsideRange {
                style: self.name,
                plain: self.holes[i].0,
            });
        }

        if has_overlap(&mappings) {
            return Err(StyleError::OverlappingRanges { style: self.name });
        }

        Ok(Style {
            name: self.name,
            mappings,
        })
    }
}

/// The part `first..=last` of `block`, shifted by the same offset as the
/// block's start.
fn segment(block: &Block, first: u32, last: u32) -> Result<RangeMapping, StyleError> {
    let offset = first - block.first as u32;
    let styled_first = block.styled as u32 + offset;
    let styled = char::from_u32(styled_first).ok_or(StyleError::InvalidTarget {
        code_point: styled_first,
    })?;
    // Bounds come from a validated CodePointRange, which never spans surrogates.
    match (char::from_u32(first), char::from_u32(last)) {
        (Some(first), Some(last)) => RangeMapping::new(first, last, styled),
        _ => Err(StyleError::InvalidTarget { code_point: first }),
    }
}

fn has_overlap(mappings: &[RangeMapping]) -> bool {
    mappings.iter().enumerate().any(|(i, a)| {
        mappings[i + 1..].iter().any(|b| {
            a.plain().overlaps(&b.plain()) || a.styled().overlaps(&b.styled())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_plain_blocks() {
        let style = StyleBuilder::new("sans-bold")
            .range('A', 'Z', '\u{1D5D4}')
            .range('a', 'z', '\u{1D5EE}')
            .build()
            .unwrap();
        assert_eq!(style.name(), "sans-bold");
        assert_eq!(style.mappings().len(), 2);
    }

    #[test]
    fn test_builder_splits_block_around_holes() {
        let style = StyleBuilder::new("fraktur")
            .range('A', 'Z', '\u{1D504}')
            .hole('C', '\u{212D}')
            .hole('Z', '\u{2128}')
            .build()
            .unwrap();

        // A..B, C, D..Y, Z
        assert_eq!(style.mappings().len(), 4);
        let styled = "\u{1D504}\u{1D505}\u{212D}\u{1D507}\u{2128}";
        assert_eq!(style.encode("ABCDZ"), styled);
        assert_eq!(style.decode(styled), "ABCDZ");
    }

    #[test]
    fn test_builder_hole_at_block_start() {
        let style = StyleBuilder::new("edge")
            .range('A', 'C', '\u{1D49C}')
            .hole('A', '\u{212C}')
            .build()
            .unwrap();
        assert_eq!(style.mappings().len(), 2);
        assert_eq!(style.encode("ABC"), "\u{212C}\u{1D49D}\u{1D49E}");
    }

    #[test]
    fn test_builder_reserved_gap_is_not_decoded() {
        let style = StyleBuilder::new("script")
            .range('A', 'Z', '\u{1D49C}')
            .hole('B', '\u{212C}')
            .build()
            .unwrap();
        // U+1D49D is the reserved slot where script B would have been
        assert_eq!(style.decode("\u{1D49D}"), "\u{1D49D}");
    }

    #[test]
    fn test_builder_rejects_hole_outside_ranges() {
        let result = StyleBuilder::new("broken")
            .range('A', 'Z', '\u{1D400}')
            .hole('a', 'x')
            .build();
        assert_eq!(
            result,
            Err(StyleError::HoleOutsideRange {
                style: "broken".to_string(),
                plain: 'a'
            })
        );
    }

    #[test]
    fn test_builder_rejects_overlapping_plain_ranges() {
        let result = StyleBuilder::new("broken")
            .range('A', 'Z', '\u{1D400}')
            .range('X', 'c', '\u{1D800}')
            .build();
        assert!(matches!(result, Err(StyleError::OverlappingRanges { .. })));
    }

    #[test]
    fn test_builder_rejects_overlapping_styled_ranges() {
        let result = StyleBuilder::new("broken")
            .range('A', 'Z', '\u{1D400}')
            .range('a', 'z', '\u{1D40A}')
            .build();
        assert!(matches!(result, Err(StyleError::OverlappingRanges { .. })));
    }

    #[test]
    fn test_builder_rejects_hole_colliding_with_block() {
        let result = StyleBuilder::new("broken")
            .range('A', 'Z', '\u{1D400}')
            .hole('B', '\u{1D401}')
            .hole('C', '\u{1D401}')
            .build();
        assert!(matches!(result, Err(StyleError::OverlappingRanges { .. })));
    }

    #[test]
    fn test_builder_rejects_inverted_range() {
        let result = StyleBuilder::new("broken").range('Z', 'A', '\u{1D400}').build();
        assert!(matches!(result, Err(StyleError::InvalidRange { .. })));
    }

    #[test]
    fn test_builder_empty_style_is_identity() {
        let style = StyleBuilder::new("none").build().unwrap();
        assert!(style.mappings().is_empty());
        assert_eq!(style.encode("Hello"), "Hello");
    }
}
