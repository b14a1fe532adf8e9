//! The built-in style presets.
//!
//! Every preset comes from the Unicode Mathematical Alphanumeric Symbols
//! block (U+1D400..U+1D7FF). Letters that were already encoded in the
//! Letterlike Symbols block before that block existed are declared as holes.

use std::str::FromStr;

use crate::style::{Style, StyleBuilder, StyleError};

/// Identifier of a built-in style.
///
/// The string form is the registry key: `StyleId::SansBold` is registered as
/// `"sans-bold"`.
///
/// There is no plain `serif` style: unstyled serif text is ordinary ASCII, so
/// only the `serif-*` variants exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    SerifBold,
    SerifItalic,
    SerifBoldItalic,
    Script,
    ScriptBold,
    Fraktur,
    FrakturBold,
    DoubleStruck,
    Sans,
    SansBold,
    SansItalic,
    SansBoldItalic,
    Monospace,
}

/// Alternate names registered alongside the built-in styles, as
/// `(alias, target)`.
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("bold", "serif-bold"),
    ("italic", "serif-italic"),
    ("bold-italic", "serif-bold-italic"),
];

impl StyleId {
    /// All built-in styles in registration order.
    pub const ALL: [StyleId; 13] = [
        StyleId::SerifBold,
        StyleId::SerifItalic,
        StyleId::SerifBoldItalic,
        StyleId::Script,
        StyleId::ScriptBold,
        StyleId::Fraktur,
        StyleId::FrakturBold,
        StyleId::DoubleStruck,
        StyleId::Sans,
        StyleId::SansBold,
        StyleId::SansItalic,
        StyleId::SansBoldItalic,
        StyleId::Monospace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleId::SerifBold => "serif-bold",
            StyleId::SerifItalic => "serif-italic",
            StyleId::SerifBoldItalic => "serif-bold-italic",
            StyleId::Script => "script",
            StyleId::ScriptBold => "script-bold",
            StyleId::Fraktur => "fraktur",
            StyleId::FrakturBold => "fraktur-bold",
            StyleId::DoubleStruck => "double-struck",
            StyleId::Sans => "sans",
            StyleId::SansBold => "sans-bold",
            StyleId::SansItalic => "sans-italic",
            StyleId::SansBoldItalic => "sans-bold-italic",
            StyleId::Monospace => "monospace",
        }
    }

    /// Returns `true` if the style has a digit block.
    pub fn has_digits(self) -> bool {
        self.digits().is_some()
    }

    /// Builds the style table for this preset.
    pub fn style(self) -> Result<Style, StyleError> {
        let (upper, lower) = self.letters();
        let mut builder = StyleBuilder::new(self.as_str())
            .range('A', 'Z', upper)
            .range('a', 'z', lower);
        if let Some(zero) = self.digits() {
            builder = builder.range('0', '9', zero);
        }
        for &(plain, styled) in self.holes() {
            builder = builder.hole(plain, styled);
        }
        builder.build()
    }

    /// Styled forms of `A` and `a`.
    fn letters(self) -> (char, char) {
        match self {
            StyleId::SerifBold => ('\u{1D400}', '\u{1D41A}'),
            StyleId::SerifItalic => ('\u{1D434}', '\u{1D44E}'),
            StyleId::SerifBoldItalic => ('\u{1D468}', '\u{1D482}'),
            StyleId::Script => ('\u{1D49C}', '\u{1D4B6}'),
            StyleId::ScriptBold => ('\u{1D4D0}', '\u{1D4EA}'),
            StyleId::Fraktur => ('\u{1D504}', '\u{1D51E}'),
            StyleId::DoubleStruck => ('\u{1D538}', '\u{1D552}'),
            StyleId::FrakturBold => ('\u{1D56C}', '\u{1D586}'),
            StyleId::Sans => ('\u{1D5A0}', '\u{1D5BA}'),
            StyleId::SansBold => ('\u{1D5D4}', '\u{1D5EE}'),
            StyleId::SansItalic => ('\u{1D608}', '\u{1D622}'),
            StyleId::SansBoldItalic => ('\u{1D63C}', '\u{1D656}'),
            StyleId::Monospace => ('\u{1D670}', '\u{1D68A}'),
        }
    }

    /// Styled form of `0`, for the five styles Unicode gives digits.
    fn digits(self) -> Option<char> {
        match self {
            StyleId::SerifBold => Some('\u{1D7CE}'),
            StyleId::DoubleStruck => Some('\u{1D7D8}'),
            StyleId::Sans => Some('\u{1D7E2}'),
            StyleId::SansBold => Some('\u{1D7EC}'),
            StyleId::Monospace => Some('\u{1D7F6}'),
            _ => None,
        }
    }

    fn holes(self) -> &'static [(char, char)] {
        match self {
            StyleId::SerifItalic => &[('h', '\u{210E}')],
            StyleId::Script => &[
                ('B', '\u{212C}'),
                ('E', '\u{2130}'),
                ('F', '\u{2131}'),
                ('H', '\u{210B}'),
                ('I', '\u{2110}'),
                ('L', '\u{2112}'),
                ('M', '\u{2133}'),
                ('R', '\u{211B}'),
                ('e', '\u{212F}'),
                ('g', '\u{210A}'),
                ('o', '\u{2134}'),
            ],
            StyleId::Fraktur => &[
                ('C', '\u{212D}'),
                ('H', '\u{210C}'),
                ('I', '\u{2111}'),
                ('R', '\u{211C}'),
                ('Z', '\u{2128}'),
            ],
            StyleId::DoubleStruck => &[
                ('C', '\u{2102}'),
                ('H', '\u{210D}'),
                ('N', '\u{2115}'),
                ('P', '\u{2119}'),
                ('Q', '\u{211A}'),
                ('R', '\u{211D}'),
                ('Z', '\u{2124}'),
            ],
            _ => &[],
        }
    }
}

impl AsRef<str> for StyleId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StyleId {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| StyleError::UnknownStyle {
                name: s.to_string(),
                available: StyleId::ALL.iter().map(|id| id.to_string()).collect(),
            })
    }
}

/// Builds every built-in style in [`StyleId::ALL`] order.
pub fn builtin_styles() -> Result<Vec<Style>, StyleError> {
    StyleId::ALL.iter().map(|id| id.style()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
    const DIGITS: &str = "0123456789";

    /// Code points the Mathematical Alphanumeric block leaves unassigned.
    fn is_reserved(c: char) -> bool {
        matches!(
            c as u32,
            0x1D455
                | 0x1D49D
                | 0x1D4A0
                | 0x1D4A1
                | 0x1D4A3
                | 0x1D4A4
                | 0x1D4A7
                | 0x1D4A8
                | 0x1D4AD
                | 0x1D4BA
                | 0x1D4BC
                | 0x1D4C4
                | 0x1D506
                | 0x1D50B
                | 0x1D50C
                | 0x1D515
                | 0x1D51D
                | 0x1D53A
                | 0x1D53F
                | 0x1D545
                | 0x1D547
                | 0x1D548
                | 0x1D549
                | 0x1D551
        )
    }

    #[test]
    fn test_every_builtin_builds() {
        let styles = builtin_styles().unwrap();
        assert_eq!(styles.len(), StyleId::ALL.len());
        for (style, id) in styles.iter().zip(StyleId::ALL) {
            assert_eq!(style.name(), id.as_str());
        }
    }

    #[test]
    fn test_builtins_never_produce_reserved_code_points() {
        for id in StyleId::ALL {
            let style = id.style().unwrap();
            for c in UPPER.chars().chain(LOWER.chars()) {
                let styled = style.encode_char(c);
                assert_ne!(styled, c, "{} leaves '{}' unstyled", id, c);
                assert!(
                    !is_reserved(styled),
                    "{} maps '{}' to reserved U+{:X}",
                    id,
                    c,
                    styled as u32
                );
            }
        }
    }

    #[test]
    fn test_builtins_round_trip_their_domain() {
        for id in StyleId::ALL {
            let style = id.style().unwrap();
            let mut domain = format!("{}{}", UPPER, LOWER);
            if id.has_digits() {
                domain.push_str(DIGITS);
            }
            let encoded = style.encode(&domain);
            assert_eq!(style.decode(&encoded), domain, "{} does not round-trip", id);
        }
    }

    #[test]
    fn test_digits_only_where_unicode_has_them() {
        let with_digits: Vec<StyleId> = StyleId::ALL
            .into_iter()
            .filter(|id| id.has_digits())
            .collect();
        assert_eq!(
            with_digits,
            vec![
                StyleId::SerifBold,
                StyleId::DoubleStruck,
                StyleId::Sans,
                StyleId::SansBold,
                StyleId::Monospace
            ]
        );
        let italic = StyleId::SerifItalic.style().unwrap();
        assert_eq!(italic.encode(DIGITS), DIGITS);
    }

    #[test]
    fn test_known_glyphs() {
        let fraktur = StyleId::Fraktur.style().unwrap();
        assert_eq!(fraktur.encode("R"), "\u{211C}");
        let double = StyleId::DoubleStruck.style().unwrap();
        assert_eq!(double.encode("R9"), "\u{211D}\u{1D7E1}");
        let mono = StyleId::Monospace.style().unwrap();
        assert_eq!(mono.encode("z"), "\u{1D6A3}");
        let sans_bold = StyleId::SansBold.style().unwrap();
        assert_eq!(sans_bold.encode("0"), "\u{1D7EC}");
    }

    #[test]
    fn test_style_id_parse_and_display() {
        for id in StyleId::ALL {
            assert_eq!(id.as_str().parse::<StyleId>(), Ok(id));
            assert_eq!(id.to_string(), id.as_str());
        }
        let err = "gothic".parse::<StyleId>().unwrap_err();
        assert!(matches!(err, StyleError::UnknownStyle { ref name, .. } if name == "gothic"));
    }

    #[test]
    fn test_aliases_target_builtins() {
        for (_, target) in BUILTIN_ALIASES {
            assert!(target.parse::<StyleId>().is_ok());
        }
    }

    #[test]
    fn test_no_plain_serif_style() {
        assert!("serif".parse::<StyleId>().is_err());
        assert!(StyleId::ALL
            .iter()
            .filter(|id| id.as_str().starts_with("serif"))
            .all(|id| id.as_str().starts_with("serif-")));
    }
}
