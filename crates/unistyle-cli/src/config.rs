//! Registry setup: built-in styles plus an optional style sheet.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use unistyle::{StyleRegistry, StyleSheet};

/// `<config dir>/unistyle/styles.yaml`, e.g. `~/.config/unistyle/styles.yaml`.
pub fn default_sheet_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("unistyle").join("styles.yaml"))
}

/// Builds the registry used by every command.
///
/// An explicit sheet must exist. The default sheet is only read when present.
pub fn load_registry(explicit: Option<&Path>) -> Result<StyleRegistry> {
    let fallback = default_sheet_path().filter(|p| p.is_file());
    load_registry_from(explicit.map(Path::to_path_buf).or(fallback))
}

pub(crate) fn load_registry_from(sheet: Option<PathBuf>) -> Result<StyleRegistry> {
    let mut registry = StyleRegistry::builtin().context("built-in style catalog is invalid")?;

    match sheet {
        Some(path) => {
            let sheet = StyleSheet::from_path(&path)
                .with_context(|| format!("failed to load style sheet {}", path.display()))?;
            registry
                .load_sheet(&sheet)
                .with_context(|| format!("failed to register styles from {}", path.display()))?;
            info!(
                "loaded {} styles from {}",
                sheet.styles.len(),
                path.display()
            );
        }
        None => debug!("no style sheet, using built-in styles only"),
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_without_sheet_has_builtins() {
        let registry = load_registry_from(None).unwrap();
        assert!(registry.contains("sans-bold"));
        assert!(registry.contains("bold"));
    }

    #[test]
    fn test_sheet_adds_styles() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"
styles:
  - name: circled
    ranges:
      - { first: "a", last: "z", styled: "\u24D0" }
"#,
        )
        .unwrap();

        let registry = load_registry_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(registry.encode("circled", "a").unwrap(), "\u{24D0}");
    }

    #[test]
    fn test_missing_explicit_sheet_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_registry(Some(&dir.path().join("missing.yaml"))).unwrap_err();
        assert!(err.to_string().contains("failed to load style sheet"));
    }

    #[test]
    fn test_sheet_clashing_with_builtin_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "aliases:\n  bold: sans").unwrap();

        let err = load_registry_from(Some(file.path().to_path_buf())).unwrap_err();
        assert!(format!("{:#}", err).contains("already registered"));
    }
}
