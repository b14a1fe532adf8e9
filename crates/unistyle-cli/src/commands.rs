//! Command implementations.
//!
//! Each command takes the registry and the input text and returns the text
//! to print, so handlers can be tested without a terminal.

use console::style;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;
use unistyle::{Style, StyleError, StyleRegistry};

/// Sample rendered next to each style by `list`.
pub const PREVIEW_TEXT: &str = "Hello World 123";

/// Validates raw input, naming the byte offset of the first invalid sequence.
pub fn utf8_text(input: &[u8]) -> Result<&str, StyleError> {
    std::str::from_utf8(input).map_err(|e| StyleError::MalformedInput {
        position: e.valid_up_to(),
    })
}

/// Removes the style when the text carries it, applies it otherwise.
pub fn toggle(registry: &StyleRegistry, id: &str, input: &[u8]) -> Result<String, StyleError> {
    let style = registry.lookup(id)?;
    let text = utf8_text(input)?;
    let plain = style.decode(text);
    if plain != text {
        Ok(plain)
    } else {
        Ok(style.encode(text))
    }
}

pub fn check(registry: &StyleRegistry, id: &str, input: &[u8]) -> Result<String, StyleError> {
    let style = registry.lookup(id)?;
    let text = utf8_text(input)?;
    Ok(format!(
        "can-encode: {}\nis-encoded: {}",
        style.can_encode(text),
        style.is_encoded(text)
    ))
}

#[derive(Debug, Serialize)]
pub struct StyleSummary {
    pub name: String,
    pub preview: String,
    pub aliases: Vec<String>,
}

pub fn summarize(registry: &StyleRegistry) -> Vec<StyleSummary> {
    registry
        .styles()
        .map(|s| StyleSummary {
            name: s.name().to_string(),
            preview: s.encode(PREVIEW_TEXT),
            aliases: registry
                .aliases()
                .filter(|(_, target)| registry.get(target).map(Style::name) == Some(s.name()))
                .map(|(alias, _)| alias.to_string())
                .collect(),
        })
        .collect()
}

pub fn list_json(registry: &StyleRegistry) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&summarize(registry))
}

pub fn list_text(registry: &StyleRegistry) -> String {
    let summaries = summarize(registry);
    let width = summaries
        .iter()
        .map(|s| s.name.width())
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n", style("Styles").bold());
    for summary in &summaries {
        let pad = " ".repeat(width - summary.name.width());
        out.push_str(&format!("  {}{}  {}", summary.name, pad, summary.preview));
        if !summary.aliases.is_empty() {
            let aliases = format!("(alias: {})", summary.aliases.join(", "));
            out.push_str(&format!("  {}", style(aliases).dim()));
        }
        out.push('\n');
    }
    out
}
