//! # Unistyle - Unicode letterform transcoding
//!
//! Unistyle turns plain Latin letters and digits into the styled letterforms
//! of the Unicode Mathematical Alphanumeric Symbols block (bold, italic,
//! script, fraktur, double-struck, sans-serif, monospace) and back again.
//!
//! ## Core Concepts
//!
//! - [`Style`]: A named table of code-point range mappings
//! - [`StyleRegistry`]: Named styles and aliases, looked up by identifier
//! - [`StyleId`]: The built-in presets
//! - [`StyleSheet`]: Extra styles declared in YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use unistyle::{decode, encode, is_encoded};
//!
//! let styled = encode("sans-bold", "Hello, World!").unwrap();
//! assert_eq!(styled.chars().count(), "Hello, World!".chars().count());
//! assert!(is_encoded("sans-bold", &styled).unwrap());
//! assert_eq!(decode("sans-bold", &styled).unwrap(), "Hello, World!");
//! ```
//!
//! ## Toggling
//!
//! Whether a selection should be styled or unstyled is up to the caller. The
//! usual policy is to try removing the style first and apply it only when
//! that changes nothing:
//!
//! ```rust
//! use unistyle::StyleId;
//!
//! let style = unistyle::lookup(StyleId::Fraktur).unwrap();
//! let toggle = |text: &str| {
//!     let plain = style.decode(text);
//!     if plain != text { plain } else { style.encode(text) }
//! };
//!
//! let on = toggle("Rust");
//! assert_ne!(on, "Rust");
//! assert_eq!(toggle(&on), "Rust");
//! ```
//!
//! ## Raw input
//!
//! `&str` is always well formed, so the `&str` operations only fail on an
//! unknown style. Text arriving as UTF-16 units or bytes goes through the
//! `*_utf16` / `*_utf8` variants, which reject malformed input with
//! [`StyleError::MalformedInput`] instead of producing partial output.

pub mod catalog;
pub mod registry;
pub mod sheet;
pub mod style;

use once_cell::sync::Lazy;

pub use catalog::{builtin_styles, StyleId, BUILTIN_ALIASES};
pub use registry::StyleRegistry;
pub use sheet::{HoleDefinition, RangeDefinition, StyleDefinition, StyleSheet};
pub use style::{CodePointRange, RangeMapping, Style, StyleBuilder, StyleError};

static DEFAULT_REGISTRY: Lazy<StyleRegistry> = Lazy::new(|| {
    StyleRegistry::builtin()
        .unwrap_or_else(|err| panic!("built-in style catalog is inconsistent: {}", err))
});

/// The process-wide registry of built-in styles.
///
/// Built on first use and never modified afterwards.
pub fn default_registry() -> &'static StyleRegistry {
    &DEFAULT_REGISTRY
}

/// Resolves a built-in style name or alias.
pub fn lookup(id: impl AsRef<str>) -> Result<&'static Style, StyleError> {
    default_registry().lookup(id)
}

/// Built-in style names in catalog order.
pub fn list_styles() -> Vec<&'static str> {
    default_registry().list_styles()
}

/// Applies a built-in style to `text`.
pub fn encode(id: impl AsRef<str>, text: &str) -> Result<String, StyleError> {
    default_registry().encode(id, text)
}

/// Removes a built-in style from `text`.
pub fn decode(id: impl AsRef<str>, text: &str) -> Result<String, StyleError> {
    default_registry().decode(id, text)
}

/// Returns whether [`encode`] would change `text`.
pub fn can_encode(id: impl AsRef<str>, text: &str) -> Result<bool, StyleError> {
    default_registry().can_encode(id, text)
}

/// Returns whether [`decode`] would change `text`.
pub fn is_encoded(id: impl AsRef<str>, text: &str) -> Result<bool, StyleError> {
    default_registry().is_encoded(id, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_is_shared() {
        assert!(std::ptr::eq(default_registry(), default_registry()));
        assert_eq!(list_styles().len(), StyleId::ALL.len());
    }

    #[test]
    fn test_free_functions_use_builtins() {
        assert_eq!(encode("bold", "A").unwrap(), "\u{1D400}");
        assert_eq!(decode(StyleId::SerifBold, "\u{1D400}").unwrap(), "A");
        assert!(can_encode("script", "e").unwrap());
        assert!(!is_encoded("script", "e").unwrap());
    }

    #[test]
    fn test_free_functions_reject_unknown_style() {
        assert!(matches!(
            encode("gothic", "A"),
            Err(StyleError::UnknownStyle { .. })
        ));
        assert!(lookup("gothic").is_err());
    }

    #[test]
    fn test_registry_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StyleRegistry>();
        assert_send_sync::<Style>();

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| encode("monospace", "abc").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "\u{1D68A}\u{1D68B}\u{1D68C}");
        }
    }
}
