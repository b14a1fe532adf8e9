//! Style registry for looking up styles by name.
//!
//! This module provides [`StyleRegistry`], which owns a catalog of styles and
//! resolves identifiers to them.
//!
//! # Design
//!
//! A registry is populated once and then only read:
//!
//! 1. **Registration**: styles and aliases are added through
//!    [`StyleRegistry::register`], [`StyleRegistry::alias`] and
//!    [`StyleRegistry::load_sheet`]. Name collisions are errors.
//! 2. **Lookup**: [`StyleRegistry::lookup`] and the transcoding shortcuts take
//!    `&self`, so a finished registry can be shared across threads freely.
//!
//! # Name Resolution
//!
//! - Style names and aliases share one namespace
//! - An alias resolves to the style its target resolved to when the alias was
//!   added, so aliases can never form cycles
//! - [`StyleRegistry::list_styles`] reports styles in registration order and
//!   leaves aliases out
//!
//! # Example
//!
//! ```rust
//! use unistyle::{StyleId, StyleRegistry};
//!
//! let registry = StyleRegistry::builtin().unwrap();
//!
//! let styled = registry.encode(StyleId::SansBold, "Hi").unwrap();
//! assert_eq!(styled, "\u{1D5DB}\u{1D5F6}");
//! assert_eq!(registry.decode("bold", "Hi").unwrap(), "Hi");
//! assert!(registry.lookup("gothic").is_err());
//! ```

use std::collections::HashMap;

use log::{debug, trace};

use crate::catalog::{builtin_styles, BUILTIN_ALIASES};
use crate::sheet::StyleSheet;
use crate::style::{Style, StyleError};

/// A catalog of named styles plus aliases.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: Vec<Style>,
    index: HashMap<String, usize>,
    aliases: Vec<(String, String)>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in style and alias.
    pub fn builtin() -> Result<Self, StyleError> {
        let mut registry = Self::new();
        for style in builtin_styles()? {
            registry.register(style)?;
        }
        for (alias, target) in BUILTIN_ALIASES {
            registry.alias(alias, target)?;
        }
        Ok(registry)
    }

    /// Adds a style under its own name.
    ///
    /// Fails with [`StyleError::DuplicateStyle`] if a style or alias already
    /// uses that name.
    pub fn register(&mut self, style: Style) -> Result<(), StyleError> {
        if self.index.contains_key(style.name()) {
            return Err(StyleError::DuplicateStyle {
                name: style.name().to_string(),
            });
        }
        debug!(
            "registered style '{}' ({} mappings)",
            style.name(),
            style.mappings().len()
        );
        self.index.insert(style.name().to_string(), self.styles.len());
        self.styles.push(style);
        Ok(())
    }

    /// Makes `alias` another name for `target`.
    pub fn alias(&mut self, alias: &str, target: &str) -> Result<(), StyleError> {
        if self.index.contains_key(alias) {
            return Err(StyleError::DuplicateStyle {
                name: alias.to_string(),
            });
        }
        let position = self.position(target)?;
        debug!("registered alias '{}' -> '{}'", alias, target);
        self.index.insert(alias.to_string(), position);
        self.aliases.push((alias.to_string(), target.to_string()));
        Ok(())
    }

    /// Registers every style of `sheet`, then its aliases.
    ///
    /// All or nothing: if any style or alias is rejected, the registry is
    /// left exactly as it was.
    pub fn load_sheet(&mut self, sheet: &StyleSheet) -> Result<(), StyleError> {
        let mut staged = self.clone();
        for definition in &sheet.styles {
            staged.register(definition.to_style()?)?;
        }
        for (alias, target) in &sheet.aliases {
            staged.alias(alias, target)?;
        }
        *self = staged;
        debug!(
            "loaded style sheet: {} styles, {} aliases",
            sheet.styles.len(),
            sheet.aliases.len()
        );
        Ok(())
    }

    /// Resolves a style name or alias.
    pub fn lookup(&self, id: impl AsRef<str>) -> Result<&Style, StyleError> {
        let position = self.position(id.as_ref())?;
        Ok(&self.styles[position])
    }

    /// Resolves a style name or alias, returning `None` when absent.
    pub fn get(&self, id: &str) -> Option<&Style> {
        self.index.get(id).map(|&i| &self.styles[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Style names in registration order. Aliases are not included.
    pub fn list_styles(&self) -> Vec<&str> {
        self.styles.iter().map(Style::name).collect()
    }

    pub fn styles(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    /// `(alias, target)` pairs in registration order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }

    /// Number of styles, not counting aliases.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn encode(&self, id: impl AsRef<str>, text: &str) -> Result<String, StyleError> {
        Ok(self.lookup(id)?.encode(text))
    }

    pub fn decode(&self, id: impl AsRef<str>, text: &str) -> Result<String, StyleError> {
        Ok(self.lookup(id)?.decode(text))
    }

    /// Returns whether encoding with `id` would change `text`.
    ///
    /// An unknown style is an error rather than `false`.
    pub fn can_encode(&self, id: impl AsRef<str>, text: &str) -> Result<bool, StyleError> {
        Ok(self.lookup(id)?.can_encode(text))
    }

    /// Returns whether decoding with `id` would change `text`.
    pub fn is_encoded(&self, id: impl AsRef<str>, text: &str) -> Result<bool, StyleError> {
        Ok(self.lookup(id)?.is_encoded(text))
    }

    pub fn encode_utf16(&self, id: impl AsRef<str>, units: &[u16]) -> Result<Vec<u16>, StyleError> {
        self.lookup(id)?.encode_utf16(units)
    }

    pub fn decode_utf16(&self, id: impl AsRef<str>, units: &[u16]) -> Result<Vec<u16>, StyleError> {
        self.lookup(id)?.decode_utf16(units)
    }

    pub fn encode_utf8(&self, id: impl AsRef<str>, bytes: &[u8]) -> Result<String, StyleError> {
        self.lookup(id)?.encode_utf8(bytes)
    }

    pub fn decode_utf8(&self, id: impl AsRef<str>, bytes: &[u8]) -> Result<String, StyleError> {
        self.lookup(id)?.decode_utf8(bytes)
    }

    fn position(&self, id: &str) -> Result<usize, StyleError> {
        trace!("looking up style '{}'", id);
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| StyleError::UnknownStyle {
                name: id.to_string(),
                available: self.styles.iter().map(|s| s.name().to_string()).collect(),
            })
    }
}
